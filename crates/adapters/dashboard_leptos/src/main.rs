use secdash_adapter_dashboard_leptos::App;

fn main() {
    leptos::logging::log!("mounting security dashboard");
    leptos::mount::mount_to_body(App);
}
