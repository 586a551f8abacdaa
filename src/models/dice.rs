use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeOfTheEmpireDiceColor {
    Blue,
    Black,
    Green,
    Purple,
    Yellow,
    Red,
    White,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeOfTheEmpireDiceSymbol {
    Blank,
    Success,
    Failure,
    Advantage,
    Threat,
    Triumph,
    Despair,
    LightSide,
    DarkSide,
}

/// A die with numbered faces `1..=sides`. A value of `None` means not rolled yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberDie {
    pub sides: u32,
    value: Option<u32>,
}

impl NumberDie {
    /// Out-of-range values are discarded.
    pub fn new(sides: u32, value: Option<u32>) -> Self {
        let mut die = Self { sides, value: None };
        if let Some(value) = value {
            die.set_value(value);
        }
        die
    }

    pub fn value(&self) -> Option<u32> {
        self.value
    }

    pub fn set_value(&mut self, value: u32) {
        self.value = (1..=self.sides).contains(&value).then_some(value);
    }

    pub fn roll<R: Rng + ?Sized>(&mut self, rng: &mut R) -> u32 {
        let value = rng.gen_range(1..=self.sides.max(1));
        self.value = Some(value);
        value
    }
}

/// A narrative die: the rolled face maps to zero or more symbols.
pub trait SymbolDie {
    fn color(&self) -> EdgeOfTheEmpireDiceColor;
    fn short_display_name(&self) -> &'static str;
    fn display_name(&self) -> &'static str;
    fn results(&self) -> Vec<EdgeOfTheEmpireDiceSymbol>;
}

/// The yellow d12.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProficiencyDie {
    pub die: NumberDie,
}

impl ProficiencyDie {
    pub fn new(value: Option<u32>) -> Self {
        Self { die: NumberDie::new(12, value) }
    }
}

impl SymbolDie for ProficiencyDie {
    fn color(&self) -> EdgeOfTheEmpireDiceColor {
        EdgeOfTheEmpireDiceColor::Yellow
    }

    fn short_display_name(&self) -> &'static str {
        "Proficiency"
    }

    fn display_name(&self) -> &'static str {
        "Proficiency Die"
    }

    fn results(&self) -> Vec<EdgeOfTheEmpireDiceSymbol> {
        use EdgeOfTheEmpireDiceSymbol::*;
        match self.die.value() {
            Some(1) => vec![Blank],
            Some(2 | 3) => vec![Success],
            Some(4 | 5) => vec![Success, Success],
            Some(6) => vec![Advantage],
            Some(7..=9) => vec![Success, Advantage],
            Some(10 | 11) => vec![Advantage, Advantage],
            Some(12) => vec![Triumph],
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::EdgeOfTheEmpireDiceSymbol::*;

    #[test]
    fn proficiency_faces() {
        assert_eq!(ProficiencyDie::new(Some(1)).results(), vec![Blank]);
        assert_eq!(ProficiencyDie::new(Some(5)).results(), vec![Success, Success]);
        assert_eq!(ProficiencyDie::new(Some(8)).results(), vec![Success, Advantage]);
        assert_eq!(ProficiencyDie::new(Some(12)).results(), vec![Triumph]);
        assert!(ProficiencyDie::new(None).results().is_empty());
    }

    #[test]
    fn out_of_range_value_is_discarded() {
        assert_eq!(ProficiencyDie::new(Some(13)).die.value(), None);
        assert_eq!(ProficiencyDie::new(Some(0)).die.value(), None);
    }

    #[test]
    fn roll_stays_in_range() {
        let mut rng = rand::thread_rng();
        let mut die = ProficiencyDie::new(None);
        for _ in 0..100 {
            let value = die.die.roll(&mut rng);
            assert!((1..=12).contains(&value));
            assert!(!die.results().is_empty());
        }
    }
}
