/// The six accepted time-of-day categories, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeOfDay {
    Morning,
    MidMorning,
    Afternoon,
    MidAfternoon,
    Dinner,
    AfterDinner,
}

impl TimeOfDay {
    pub const ALL: [TimeOfDay; 6] = [
        TimeOfDay::Morning,
        TimeOfDay::MidMorning,
        TimeOfDay::Afternoon,
        TimeOfDay::MidAfternoon,
        TimeOfDay::Dinner,
        TimeOfDay::AfterDinner,
    ];

    /// Canonical lowercase key, as typed by the user after normalization
    pub fn key(self) -> &'static str {
        match self {
            TimeOfDay::Morning => "morning",
            TimeOfDay::MidMorning => "mid-morning",
            TimeOfDay::Afternoon => "afternoon",
            TimeOfDay::MidAfternoon => "mid-afternoon",
            TimeOfDay::Dinner => "dinner",
            TimeOfDay::AfterDinner => "after dinner",
        }
    }

    /// Capitalized label shown in hints
    pub fn label(self) -> &'static str {
        match self {
            TimeOfDay::Morning => "Morning",
            TimeOfDay::MidMorning => "Mid-morning",
            TimeOfDay::Afternoon => "Afternoon",
            TimeOfDay::MidAfternoon => "Mid-afternoon",
            TimeOfDay::Dinner => "Dinner",
            TimeOfDay::AfterDinner => "After dinner",
        }
    }

    pub fn suggestion(self) -> &'static str {
        match self {
            TimeOfDay::Morning => {
                "Breakfast: Scrambled eggs with avocado toast and fresh orange juice"
            }
            TimeOfDay::MidMorning => {
                "Mid-morning snack: Greek yogurt with mixed berries and granola"
            }
            TimeOfDay::Afternoon => "Lunch: Grilled chicken sandwich with side salad",
            TimeOfDay::MidAfternoon => "Afternoon snack: Banana with almond butter",
            TimeOfDay::Dinner => "Dinner: Garlic butter shrimp pasta with roasted vegetables",
            TimeOfDay::AfterDinner => "Dessert: Dark chocolate with strawberries",
        }
    }

    /// Exact match against the canonical keys. Callers normalize first.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|time| time.key() == key)
    }
}

/// Look up the suggestion for a canonical key
pub fn lookup(key: &str) -> Option<&'static str> {
    TimeOfDay::from_key(key).map(TimeOfDay::suggestion)
}

/// All (key, suggestion) pairs in table order
pub fn entries() -> impl Iterator<Item = (&'static str, &'static str)> {
    TimeOfDay::ALL
        .into_iter()
        .map(|time| (time.key(), time.suggestion()))
}

#[cfg(test)]
#[path = "table_tests.rs"]
mod table_tests;
