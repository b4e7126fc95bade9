pub mod activities;
pub mod activity;
pub mod root;
