/// Building list-page links that keep the current filters
use query_links::{Overrides, RequestTarget, query_transform, redirect_to_login};

fn main() {
    // The request being served
    let target = RequestTarget::parse("/cars/?title=test1&page=1");

    // Change only the page
    println!("{}", query_transform(target.query(), [("page", 2)])); // title=test1&page=2
    println!("{}", target.href_with([("page", 2)])); // /cars/?title=test1&page=2
    println!();

    // Clear the search and go back to the first page
    let reset = Overrides::new().remove("title").remove("page");
    println!("{}", target.href_with(&reset)); // /cars/
    println!();

    // Anonymous visitors are sent to the login page
    println!("{}", redirect_to_login("/accounts/login/", target.path())); // /accounts/login/?next=/cars/
}
