//! UI Components for the member card.

mod card_host;
mod card_layers;
mod member_card;

pub use card_host::CardHost;
pub use member_card::MemberCard;
