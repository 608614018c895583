//! Per-environment deployment params: read, substitute, parse, look up.
//!
//! ```no_run
//! use std::path::Path;
//! use paramctl::params::{self, Env};
//!
//! let env = Env::from_system(None)?;
//! let api = params::load_api_params(Path::new("api_params.yaml"), &env)?;
//! if let Some(dev) = api.get_env("dev") {
//!     println!("{:?}", dev.endpoints()?);
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

mod endpoint;
mod env;
mod error;
mod loader;
mod project;
mod schema;
mod substitute;

pub use endpoint::{
    ApiIdentifier, Configuration, Endpoint, EndpointData, extract_endpoint_config,
};
pub use env::Env;
pub use error::{ParamsError, ParseSource};
pub use loader::{
    PARAMS_FILE, load_api_params, load_api_params_from_dir, load_api_product_params,
    load_application_params, load_substituted, params_file_in,
};
pub use project::{ProjectInfo, ProjectMetaData, ProjectParams, ProjectType};
pub use schema::{
    ApiImportParams, ApiParams, ApiProductImportParams, ApiProductParams, ApiProductVcsParams,
    ApiVcsParams, ApplicationImportParams, ApplicationParams, ApplicationVcsParams, Environment,
};
pub use substitute::substitute;
