pub mod counter_reducer;
pub mod results_reducer;

pub use counter_reducer::reduce_counter;
pub use results_reducer::reduce_results;
