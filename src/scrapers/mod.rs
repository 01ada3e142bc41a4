pub mod browser;
pub mod extract;
pub mod run;
pub mod sites;
pub mod traits;

pub use browser::ChromeSession;
pub use traits::Page;
