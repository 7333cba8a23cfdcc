pub mod plan_cmd;
pub mod run_cmd;
pub mod xcorr_args;

pub use plan_cmd::PlanCMD;
pub use run_cmd::RunCMD;
pub use xcorr_args::XcorrArgs;
