//! Code generators
//!
//! Three independent, purely textual renderers over an [`AnalysisResult`]:
//! the auto-mock module, the user-mock scaffold, and the ambient declaration
//! file. All configuration (mount-point name, module id) is passed in
//! explicitly; generators hold no state and never fail.
//!
//! [`AnalysisResult`]: crate::models::AnalysisResult

pub mod auto_mock;
pub mod declarations;
pub mod user_mock;
