use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Matches "20-foot radius", "Self (15-foot cone)", "1-mile radius", "60 ft. line",
    // "100-foot-long wall", "10-foot circle"
    pub static ref RE_AREA: Regex = Regex::new(
        r"(?i)(?P<size>\d+)[- ](?P<unit>foot|feet|ft|miles?)\.?[- ](?:(?:long|wide|high|tall|radius)[- ])?(?P<shape>cone|cube|cylinder|line|radius|sphere|square|wall|circle)"
    ).unwrap();
}
