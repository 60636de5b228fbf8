//! Google Cloud credentials

pub mod adc;
