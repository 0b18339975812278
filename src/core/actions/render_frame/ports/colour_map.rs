use crate::core::data::colour::ColourSample;

pub trait ColourMap {
    fn map(&self, iterations: u32) -> ColourSample;

    fn display_name(&self) -> &str;
}
