use crate::models::codes::{code_table, code_to_name};

code_table! {
    /// Spell level; 0 is a cantrip.
    pub enum Level {
        Cantrip = 0 => "Cantrip",
        First = 1 => "1st",
        Second = 2 => "2nd",
        Third = 3 => "3rd",
        Fourth = 4 => "4th",
        Fifth = 5 => "5th",
        Sixth = 6 => "6th",
        Seventh = 7 => "7th",
        Eighth = 8 => "8th",
        Ninth = 9 => "9th",
    }
}

code_table! {
    pub enum School {
        Abjuration = 0 => "Abjuration",
        Conjuration = 1 => "Conjuration",
        Divination = 2 => "Divination",
        Enchantment = 3 => "Enchantment",
        Evocation = 4 => "Evocation",
        Illusion = 5 => "Illusion",
        Necromancy = 6 => "Necromancy",
        Transmutation = 7 => "Transmutation",
    }
}

code_table! {
    pub enum CastingTime {
        Action = 0 => "1 Action",
        BonusAction = 1 => "1 Bonus Action",
        Reaction = 2 => "1 Reaction",
        OneMinute = 3 => "1 Minute",
        TenMinutes = 4 => "10 Minutes",
        OneHour = 5 => "1 Hour",
        EightHours = 6 => "8 Hours",
        TwelveHours = 7 => "12 Hours",
        TwentyFourHours = 8 => "24 Hours",
    }
}

code_table! {
    /// Published book a spell comes from.
    pub enum Source {
        PlayersHandbook = 0 => "Player's Handbook",
        XanatharsGuide = 1 => "Xanathar's Guide to Everything",
        TashasCauldron = 2 => "Tasha's Cauldron of Everything",
        SwordCoast = 3 => "Sword Coast Adventurer's Guide",
        ElementalEvil = 4 => "Elemental Evil Player's Companion",
        FizbansTreasury = 5 => "Fizban's Treasury of Dragons",
        Strixhaven = 6 => "Strixhaven: A Curriculum of Chaos",
        AcquisitionsIncorporated = 7 => "Acquisitions Incorporated",
        ExplorersGuide = 8 => "Explorer's Guide to Wildemount",
    }
}

code_table! {
    /// Range codes. A second distance means the spell is centred on a point
    /// at the first distance and reaches the second.
    pub enum Range {
        SelfOnly = 0 => "Self",
        SelfByFive = 1 => "Self (5 ft)",
        SelfByFifteen = 2 => "Self (15 ft)",
        SelfByThirty = 3 => "Self (30 ft)",
        SelfBySixty = 4 => "Self (60 ft)",
        Touch = 5 => "Touch",
        TouchBySixty = 6 => "Touch (60 ft)",
        Five = 7 => "5 ft",
        Ten = 8 => "10 ft",
        Twenty = 9 => "20 ft",
        Thirty = 10 => "30 ft",
        Sixty = 11 => "60 ft",
        Ninety = 12 => "90 ft",
        OneHundred = 13 => "100 ft",
        OneHundredTwenty = 14 => "120 ft",
        OneHundredTwentyByTwenty = 15 => "120 ft (20 ft)",
        OneHundredFifty = 16 => "150 ft",
        OneHundredFiftyBySixty = 17 => "150 ft (60 ft)",
        Sight = 18 => "Sight",
        ThreeHundred = 19 => "300 ft",
        FiveHundred = 20 => "500 ft",
        OneThousand = 21 => "1000 ft",
        OneMile = 22 => "1 mile",
        FiveHundredMiles = 23 => "500 miles",
        Unlimited = 24 => "Unlimited",
    }
}

code_table! {
    pub enum Duration {
        Instantaneous = 0 => "Instantaneous",
        OneRound = 1 => "1 Round",
        OneMinute = 2 => "1 Minute",
        TenMinutes = 3 => "10 Minutes",
        OneHour = 4 => "1 Hour",
        TwoHours = 5 => "2 Hours",
        EightHours = 6 => "8 Hours",
        TwentyFourHours = 7 => "24 Hours",
        SevenDays = 8 => "7 Days",
        TenDays = 9 => "10 Days",
        ThirtyDays = 10 => "30 Days",
        UntilDispelled = 11 => "Until Dispelled",
        UntilDispelledOrTriggered = 12 => "Until Dispelled or Triggered",
        Special = 13 => "Special",
    }
}

code_table! {
    /// Area-of-effect shape bucket. `Other` holds area text that does not
    /// parse into a shape and size.
    pub enum AreaShape {
        Cone = 0 => "Cone",
        Cube = 1 => "Cube",
        Cylinder = 2 => "Cylinder",
        Line = 3 => "Line",
        Radius = 4 => "Radius",
        Sphere = 5 => "Sphere",
        Square = 6 => "Square",
        Wall = 7 => "Wall",
        Circle = 8 => "Circle",
        Other = 9 => "Other",
    }
}

pub fn level_name(code: i64) -> &'static str {
    code_to_name::<Level>(code)
}

pub fn school_name(code: i64) -> &'static str {
    code_to_name::<School>(code)
}

pub fn casting_time_name(code: i64) -> &'static str {
    code_to_name::<CastingTime>(code)
}

pub fn source_name(code: i64) -> &'static str {
    code_to_name::<Source>(code)
}

pub fn range_name(code: i64) -> &'static str {
    code_to_name::<Range>(code)
}

pub fn duration_name(code: i64) -> &'static str {
    code_to_name::<Duration>(code)
}
