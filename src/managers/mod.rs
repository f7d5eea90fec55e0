pub mod adb;
