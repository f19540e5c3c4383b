// SPDX-License-Identifier: MPL-2.0
//! UI components: navigation menu, contact form, gallery lightbox, toast
//! notifications, and shared design tokens.

pub mod contact_form;
pub mod design_tokens;
pub mod lightbox;
pub mod menu;
pub mod notifications;
pub mod theming;
