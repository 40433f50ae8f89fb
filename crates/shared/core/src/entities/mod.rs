mod bar;
mod bar_builder;
mod side;
mod trade;

pub use bar::Bar;
pub use bar_builder::BarBuilder;
pub use side::Side;
pub use trade::Trade;
