#![allow(dead_code, unused_imports)]

pub mod engine;
pub mod logging;
pub mod proptest_prelude;
pub mod scripted;

pub use engine::{catalog_engine, engine_with, netflix_only, FailingAi, FailingProvider, StubbornAi};
pub use scripted::ScriptedAdapter;
