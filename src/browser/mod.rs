pub mod mock_page;
pub mod webdriver;

mod page;

pub use mock_page::{MockAction, MockPage};
pub use page::{Locator, Page};
pub use webdriver::WebDriverPage;
