pub mod curp_form;
pub mod result_panel;

pub use curp_form::CurpForm;
pub use result_panel::ResultPanel;
