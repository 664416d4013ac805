pub mod keypad;
pub mod operand_picker;
pub mod progress_bar;
pub mod question_card;
pub mod round_summary;
