//! Assistant Domain Module
//!
//! Pure, deterministic pieces of the chat pipeline: intent classification,
//! brand and language resolution, prompt synthesis and follow-up actions.
//! Nothing here performs I/O; the application layer wires these together
//! with the knowledge and generation ports.
//!
//! # Example
//!
//! ```
//! use container_assistant::domain::assistant::{classify, resolve_action, Intent, Site};
//!
//! let intent = classify("Can I track my shipment?");
//! assert_eq!(intent, Intent::Track);
//! assert_eq!(resolve_action(intent, Site::ContainerBazar).redirect, Some("/track/index.html"));
//! ```

pub mod action;
pub mod intent;
pub mod language;
pub mod message;
pub mod prompt;
pub mod site;

pub use action::{resolve_action, ActionDirective};
pub use intent::{classify, Intent};
pub use language::{language_name, supported_language_count, DEFAULT_LANGUAGE};
pub use message::{InboundMessage, DEFAULT_LANGUAGE_CODE};
pub use prompt::{build_prompt, PromptDocument};
pub use site::{Brand, Site};
