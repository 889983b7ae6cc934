mod question_vm;
mod result_vm;
mod status_vm;
mod summary_vm;

pub use question_vm::{ProgressVm, QuestionVm};
pub use result_vm::ResultVm;
pub use status_vm::StatusVm;
pub use summary_vm::{SummaryVm, tier_message};
