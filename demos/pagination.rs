/// Paginating a filtered car list
use query_links::{Paginator, RequestTarget};
use std::num::NonZeroUsize;

fn main() {
    let cars = ["Model S", "Model 3", "Octavia", "Fabia", "Corolla"];
    let target = RequestTarget::parse("/cars/?title=o&page=2");

    let Some(per_page) = NonZeroUsize::new(2) else {
        return;
    };
    let paginator = Paginator::new(cars.len(), per_page);

    match paginator.page_from_query(target.query()) {
        Ok(page) => {
            println!("{page}"); // <Page 2 of 3>
            for car in page.slice(&cars) {
                println!("  {car}");
            }
            if let Some(link) = page.previous_link(target.query()) {
                println!("previous: {link}"); // ?title=o&page=1
            }
            if let Some(link) = page.next_link(target.query()) {
                println!("next: {link}"); // ?title=o&page=3
            }
        }
        Err(err) => println!("404: {err}"),
    }
}
