#![no_std]

pub mod events;
pub mod status_leds;
