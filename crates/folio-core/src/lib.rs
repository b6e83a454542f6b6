pub mod accessors;
pub mod answers;
pub mod completion;
pub mod defaults;
pub mod diagnostics;
pub mod document;
pub mod error;
pub mod io;
pub mod paths;
pub mod session;
pub mod settings;
pub mod step;
pub mod summary;
pub mod transform;

pub use answers::WizardAnswers;
pub use document::ConfigDocument;
pub use error::{FolioError, Result};
pub use summary::{summarize, Summary};
pub use transform::generate;
