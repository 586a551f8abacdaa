use crate::models::codes::code_table;

code_table! {
    /// Columns the user can show or hide, in grid order.
    pub enum Column {
        Name = 0 => "Name",
        Level = 1 => "Level",
        School = 2 => "School",
        CastingTime = 3 => "Casting Time",
        Duration = 4 => "Duration",
        Range = 5 => "Range",
        Area = 6 => "Area",
        Attack = 7 => "Attack",
        Save = 8 => "Save",
        DamageAndEffect = 9 => "Damage/Effect",
        Ritual = 10 => "Ritual",
        Concentration = 11 => "Concentration",
        Verbal = 12 => "Verbal",
        Somatic = 13 => "Somatic",
        Material = 14 => "Material",
        Source = 15 => "Source",
        Details = 16 => "Details",
    }
}

impl Column {
    pub fn initial_width(self) -> f32 {
        match self {
            Column::Name => 180.0,
            Column::Level => 90.0,
            Column::School => 130.0,
            Column::CastingTime => 110.0,
            Column::Duration => 140.0,
            Column::Range | Column::Area | Column::Attack => 100.0,
            Column::Save | Column::DamageAndEffect => 110.0,
            Column::Ritual | Column::Concentration | Column::Verbal | Column::Somatic => 100.0,
            Column::Material | Column::Details => 200.0,
            Column::Source => 160.0,
        }
    }

    /// Cells whose full text opens in a modal when clicked.
    pub fn opens_modal(self) -> bool {
        matches!(self, Column::Material | Column::Details)
    }
}
