//! Reusable UI components shared by pages.

pub mod restaurant_card;
