// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Response parsing for cBox JSON responses.
//!
//! Every response is wrapped in an [`Envelope`] carrying a `SUCCESS` flag.
//! Set commands only need the envelope check; `GET ALLS` additionally decodes
//! into an [`AllsResponse`].

mod alls;
mod envelope;

pub use alls::{AllsData, AllsInfo, AllsResponse};
pub use envelope::{Envelope, EnvelopeInfo};
