// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Translations use the Fluent localization system. `.ftl` files are embedded
//! in the binary and the locale is resolved from the CLI, the config file or
//! the system settings, falling back to `en-US`.

pub mod fluent;
