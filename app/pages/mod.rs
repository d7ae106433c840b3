pub mod chatbot;
pub mod dashboard;
pub mod health;
pub mod home;
pub mod info;
pub mod login;
pub mod logout;
pub mod styles;
pub mod team;
