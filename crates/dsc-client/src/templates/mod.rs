//  Copyright (c) 2026 Metaform Systems, Inc
//
//  This program and the accompanying materials are made available under the
//  terms of the Apache License, Version 2.0 which is available at
//  https://www.apache.org/licenses/LICENSE-2.0
//
//  SPDX-License-Identifier: Apache-2.0
//
//  Contributors:
//       Metaform Systems, Inc. - initial API and implementation
//

//! Fixture bodies for resources whose content matters to a negotiation: usage rules and contract validity.

pub mod rules;

use crate::model::ContractDesc;
use crate::util::Clock;
use chrono::{SecondsFormat, TimeDelta};

impl ContractDesc {
    /// A contract valid from the clock's current instant for the given number of days.
    pub fn valid_for(clock: &dyn Clock, days: i64) -> Self {
        let start = clock.now();
        let end = start + TimeDelta::days(days);
        ContractDesc::builder()
            .start(start.to_rfc3339_opts(SecondsFormat::Millis, false))
            .end(end.to_rfc3339_opts(SecondsFormat::Millis, false))
            .build()
    }
}
