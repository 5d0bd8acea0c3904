//! Naurat Importation Bot - Conversational import-compliance assistant
//!
//! This crate answers questions about importing products into Mexico:
//! tariff codes, taxes, and the official standards (NOMs) that apply.
//! Qualifying answers are turned into structured product records that
//! users can download as a spreadsheet.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
