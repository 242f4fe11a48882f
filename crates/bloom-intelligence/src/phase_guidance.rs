// ABOUTME: Static nutrition guidance per menstrual cycle phase
// ABOUTME: Immutable PhaseInfo table keyed by the closed CyclePhase enum
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bloom Wellness

//! Cycle phase guidance
//!
//! Reference data shown next to a meal plan. It is never derived from user
//! input; the table is exhaustive over [`CyclePhase`] so every phase resolves.

use bloom_core::models::CyclePhase;
use serde::Serialize;

/// Nutrition focus for one cycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PhaseInfo {
    /// Three descriptive focus areas, most important first
    pub focus: [&'static str; 3],
    /// Single nutrient to boost
    pub boost: &'static str,
    /// One-sentence explanation
    pub description: &'static str,
}

static MENSTRUAL: PhaseInfo = PhaseInfo {
    focus: ["Iron-Rich Foods", "Anti-Inflammatory", "Warming Meals"],
    boost: "Iron",
    description: "Replenish iron lost during your period with warm, nourishing meals.",
};

static FOLLICULAR: PhaseInfo = PhaseInfo {
    focus: ["Fresh Vegetables", "Lean Protein", "Fermented Foods"],
    boost: "Vitamin B",
    description: "Rising energy pairs well with light, fresh meals and gut-friendly foods.",
};

static OVULATORY: PhaseInfo = PhaseInfo {
    focus: ["Fiber-Rich Foods", "Antioxidants", "Light Meals"],
    boost: "Zinc",
    description: "Fiber and antioxidant-rich produce support hormone balance around ovulation.",
};

static LUTEAL: PhaseInfo = PhaseInfo {
    focus: ["Complex Carbs", "Magnesium-Rich Foods", "Healthy Fats"],
    boost: "Magnesium",
    description: "Steady blood sugar and magnesium help ease premenstrual symptoms.",
};

/// Look up the guidance for a phase
#[must_use]
pub fn phase_info(phase: CyclePhase) -> &'static PhaseInfo {
    match phase {
        CyclePhase::Menstrual => &MENSTRUAL,
        CyclePhase::Follicular => &FOLLICULAR,
        CyclePhase::Ovulatory => &OVULATORY,
        CyclePhase::Luteal => &LUTEAL,
    }
}
