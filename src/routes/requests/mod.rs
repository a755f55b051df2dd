//! Public blood request pages: the board, one request, and the add form.

mod add;
mod board;
mod card;
mod detail;

pub use add::{AddRequestForm, AddRequestPage};
pub use board::RequestBoardPage;
pub(crate) use card::RequestCard;
pub use detail::RequestDetailPage;
