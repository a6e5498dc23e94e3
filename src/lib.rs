pub mod cards;
pub mod common;
pub mod config;
pub mod drafts;
pub mod editor;
pub mod gateway;
pub mod listing;
pub mod models;
pub mod web;
