/*!
Presentational components shared by every page of the app. Components render to plain html and rely on the classes defined in the app stylesheet.
*/

mod alert;
mod button;
mod card;
mod chip;
mod form;
mod gauge;
mod layout;
mod link;
mod spinner;
mod table;
mod topbar;

pub use self::alert::*;
pub use self::button::*;
pub use self::card::*;
pub use self::chip::*;
pub use self::form::*;
pub use self::gauge::*;
pub use self::layout::*;
pub use self::link::*;
pub use self::spinner::*;
pub use self::table::*;
pub use self::topbar::*;
