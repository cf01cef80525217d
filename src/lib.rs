//! Connect TicketVeiling accounts to ippies.nl rewards accounts and report bids and won auctions
//! through the ippies.nl REST API.
//!
//! Every business call performs a fresh client-credentials grant, attaches the returned bearer
//! token, and stores the parsed vendor response so callers can inspect it afterwards via
//! [`IppiesClient::last_response`].

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod obs;
pub mod report;
pub mod token;

pub use client::*;

mod _prelude {
	pub use std::{
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		sync::Arc,
	};

	pub use parking_lot::Mutex;
	#[cfg(feature = "reqwest")]
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize};
	pub use serde_json::Value;
	pub use thiserror::Error as ThisError;
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

pub use oauth2;
#[cfg(feature = "reqwest")] pub use reqwest;
pub use serde_json;
pub use url;
#[cfg(test)] use {color_eyre as _, httpmock as _};
