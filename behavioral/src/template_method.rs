//! Pattern 9: Template Method
//!
//! `generate` fixes the skeleton: header, body, footer, always in that
//! order. Concrete reports fill in only the hooks.

pub trait Report {
    fn title(&self) -> String;
    fn body(&self) -> Vec<String>;

    /// The template method. Implementors override the hooks, not this.
    fn generate(&self) -> Vec<String> {
        let mut lines = vec![format!("== {} ==", self.title())];
        lines.extend(self.body());
        lines.push(format!("-- end of {} --", self.title()));
        lines
    }
}

pub struct SalesReport {
    regions: Vec<(String, u32)>,
}

impl SalesReport {
    pub fn new(regions: Vec<(String, u32)>) -> Self {
        SalesReport { regions }
    }
}

impl Report for SalesReport {
    fn title(&self) -> String {
        "sales".to_string()
    }

    fn body(&self) -> Vec<String> {
        self.regions
            .iter()
            .map(|(region, units)| format!("{region}: {units} units"))
            .collect()
    }
}

pub struct UptimeReport {
    days: u32,
}

impl UptimeReport {
    pub fn new(days: u32) -> Self {
        UptimeReport { days }
    }
}

impl Report for UptimeReport {
    fn title(&self) -> String {
        "uptime".to_string()
    }

    fn body(&self) -> Vec<String> {
        vec![format!("{} days without incident", self.days)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn the_skeleton_frames_every_report_the_same_way() {
        let report = UptimeReport::new(42);
        assert_eq!(
            report.generate(),
            vec!["== uptime ==", "42 days without incident", "-- end of uptime --"]
        );
    }

    #[test]
    fn hooks_fill_the_body_in_order() {
        let report = SalesReport::new(vec![
            ("north".to_string(), 120),
            ("south".to_string(), 95),
        ]);
        assert_eq!(
            report.generate(),
            vec![
                "== sales ==",
                "north: 120 units",
                "south: 95 units",
                "-- end of sales --",
            ]
        );
    }

    #[test]
    fn header_always_precedes_body_and_footer_closes() {
        let report = SalesReport::new(vec![]);
        let lines = report.generate();
        assert_eq!(lines.first().map(String::as_str), Some("== sales =="));
        assert_eq!(lines.last().map(String::as_str), Some("-- end of sales --"));
    }

    #[test]
    fn generating_twice_replays_the_same_lines() {
        let report = UptimeReport::new(7);
        assert_eq!(report.generate(), report.generate());
    }
}
