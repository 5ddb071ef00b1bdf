pub mod card_animated;
pub mod charts;
pub mod hover_card;
pub mod ui;
