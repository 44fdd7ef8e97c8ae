//! Walkthrough of state-driven navigation links.
//!
//! No renderer here: "views" are plain strings, and each section rebuilds its
//! link the way a host would rebuild views on every pass.

use segue_core::*;
use segue_navigation::*;

#[derive(Clone, Debug, PartialEq)]
enum Route {
    Detail(u32),
    Search(String),
}

fn detail_link(binding: Binding<Option<u32>>) -> Link<String> {
    NavLink(
        binding.clone(),
        {
            let binding = binding.clone();
            move |active| {
                log::info!("activation toggled: {active}");
                if active {
                    binding.set(Some(1));
                }
            }
        },
        |detail| format!("[detail screen for item {}]", detail.get()),
        || "item row".to_string(),
    )
}

fn render(link: &Link<String>) {
    match link.destination() {
        Some(dest) => println!("{} -> {}", link.label(), dest),
        None => println!("{} (nothing presented)", link.label()),
    }
}

fn main() {
    env_logger::init();

    // Optional-driven link: activation populates the source, dismissal
    // clears it, and every pass re-derives the destination from state.
    let selected = store(None::<u32>);
    let binding = selected.binding();

    render(&detail_link(binding.clone()));

    detail_link(binding.clone()).activate();
    render(&detail_link(binding.clone()));

    // edits through the destination binding land in the source
    if let Some(detail) = binding.unwrapping() {
        detail.set(detail.get() + 10);
    }
    println!("source after edit: {:?}", selected.get());

    detail_link(binding.clone()).dismiss();
    render(&detail_link(binding));
    println!("source after dismissal: {:?}", selected.get());

    // Enum-driven link: the Detail case drives one link, any other case
    // behaves like no value at all.
    let route = store(Some(Route::Search("mugs".into())));
    let case_link = NavLinkCase(
        route.binding(),
        case_path!(Route::Detail),
        |_| {},
        |detail| format!("[detail screen for item {}]", detail.get()),
        || "detail row".to_string(),
    );
    render(&case_link);

    route.set(Some(Route::Detail(7)));
    let case_link = NavLinkCase(
        route.binding(),
        case_path!(Route::Detail),
        |_| {},
        |detail| format!("[detail screen for item {}]", detail.get()),
        || "detail row".to_string(),
    );
    render(&case_link);
    println!("final route: {:?}", route.get());
}
