pub mod pager;
pub mod send_money_form;
pub mod transaction_list;

pub use pager::{PageSelected, Pager};
pub use send_money_form::{Currency, SendMoneyForm};
