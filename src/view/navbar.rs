use std::fmt;
use super::Route;

pub const BRAND: &str = "Contact Manager";

/// Static links to the two top-level routes.
#[derive(Debug, Clone, Copy, Default)]
pub struct Navbar;

impl Navbar {
    pub fn brand(&self) -> (&'static str, Route) {
        (BRAND, Route::List)
    }

    pub fn links(&self) -> [(&'static str, Route); 2] {
        [
            ("Contacts", Route::List),
            ("Add Contact", Route::Add),
        ]
    }
}

impl fmt::Display for Navbar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (brand, home) = self.brand();
        write!(f, "{} <{}>", brand, home)?;
        for (label, route) in self.links() {
            write!(f, " | {} <{}>", label, route)?;
        }
        Ok(())
    }
}
