//! Console output formatter for content records

use colored::{ColoredString, Colorize};
use serde::Serialize;
use umweltzone_domain::{Circuit, DatePattern, Faq, LowEmissionZone, ZoneNumber};

#[derive(Serialize)]
struct ZoneCircuits<'a> {
    zone: &'a str,
    circuits: &'a [Circuit],
}

/// Formats content records for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format FAQs as numbered question/answer blocks
    pub fn format_faqs(faqs: &[Faq]) -> String {
        let mut output = Self::header("Frequently Asked Questions");
        for (index, faq) in faqs.iter().enumerate() {
            output.push_str(&format!(
                "\n{} {}\n{}\n",
                format!("{}.", index + 1).cyan().bold(),
                faq.question.bold(),
                faq.answer
            ));
        }
        output
    }

    /// Format zones as one line each, with their sticker badge
    pub fn format_zones(zones: &[LowEmissionZone]) -> String {
        let mut output = Self::header(&format!("Low Emission Zones ({})", zones.len()));
        output.push('\n');
        for zone in zones {
            output.push_str(&format!(
                "{} {} {}\n",
                Self::badge(zone.zone_number),
                zone.display_name.bold(),
                format!("({})", zone.name).dimmed()
            ));
        }
        output
    }

    /// Format the details of a single zone
    pub fn format_zone(zone: &LowEmissionZone) -> String {
        let mut output = Self::header(&zone.display_name);
        output.push('\n');

        let fields = [
            ("Name", Some(zone.name.clone())),
            ("Zone number", zone.zone_number.map(|n| n.to_string())),
            ("Since", zone.zone_number_since.clone()),
            ("Next zone number as of", zone.next_zone_number_as_of.clone()),
            (
                "Cities",
                (!zone.list_of_cities.is_empty()).then(|| zone.list_of_cities.join(", ")),
            ),
            ("Geometry source", zone.geometry_source.clone()),
            ("Geometry updated at", zone.geometry_updated_at.clone()),
            ("Further information", zone.further_information.clone()),
            ("Umwelt-Planer", zone.url_umwelt_planer.clone()),
            ("Badge online", zone.url_badge_online.clone()),
        ];
        for (label, value) in fields {
            if let Some(value) = value {
                output.push_str(&format!("{} {}\n", format!("{label}:").cyan().bold(), value));
            }
        }
        output
    }

    /// Format a zone's circuits, writing dates with `pattern`
    pub fn format_circuits(
        zone_name: &str,
        circuits: &[Circuit],
        pattern: &DatePattern,
    ) -> String {
        let point_count: usize = circuits.iter().map(|c| c.points.len()).sum();
        let mut output = Self::header(&format!("Circuits of {}", zone_name));
        output.push_str(&format!(
            "\n{} circuits, {} points\n",
            circuits.len(),
            point_count
        ));

        for (index, circuit) in circuits.iter().enumerate() {
            let mut line = format!(
                "  {} {} points",
                format!("#{}", index + 1).yellow(),
                circuit.points.len()
            );
            if let Some(since) = circuit.valid_since {
                line.push_str(&format!(", valid since {}", pattern.format_date(since)));
            }
            if let Some(number) = circuit.zone_number {
                line.push_str(&format!(", zone {}", Self::badge(Some(number))));
            }
            output.push_str(&line);
            output.push('\n');
        }
        output
    }

    /// Format circuits of several zones as one JSON array
    pub fn format_circuits_json(entries: &[(&str, &[Circuit])]) -> String {
        let zones: Vec<ZoneCircuits<'_>> = entries
            .iter()
            .map(|&(zone, circuits)| ZoneCircuits { zone, circuits })
            .collect();
        Self::format_json(&zones)
    }

    /// Format any serializable value as pretty JSON
    pub fn format_json<T: Serialize + ?Sized>(value: &T) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e))
    }

    fn badge(number: Option<ZoneNumber>) -> ColoredString {
        let Some(number) = number else {
            return "[-]".dimmed();
        };
        let label = format!("[{}]", number.badge().label);
        match number {
            ZoneNumber::Red => label.red().bold(),
            ZoneNumber::Yellow => label.yellow().bold(),
            ZoneNumber::Green => label.green().bold(),
            ZoneNumber::LightBlue => label.bright_blue().bold(),
            ZoneNumber::DarkBlue => label.blue().bold(),
        }
    }

    fn header(title: &str) -> String {
        let line = "═".repeat(60);
        format!("{}\n{}\n{}\n", line.cyan(), title.bold(), line.cyan())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use umweltzone_domain::GeoPoint;

    fn plain() {
        colored::control::set_override(false);
    }

    fn zone() -> LowEmissionZone {
        serde_json::from_str(
            r#"{"name": "berlin", "displayName": "Berlin", "zoneNumber": 4,
                "listOfCities": ["Berlin"], "zoneNumberSince": "01.01.2010"}"#,
        )
        .unwrap()
    }

    #[test]
    fn test_format_faqs_numbers_entries() {
        plain();
        let output = ConsoleFormatter::format_faqs(&[Faq::new("Q1", "A1"), Faq::new("Q2", "A2")]);
        assert!(output.contains("1. Q1\nA1"));
        assert!(output.contains("2. Q2\nA2"));
    }

    #[test]
    fn test_format_zones_shows_badges() {
        plain();
        let mut unnumbered = zone();
        unnumbered.zone_number = None;
        let output = ConsoleFormatter::format_zones(&[zone(), unnumbered]);
        assert!(output.contains("Low Emission Zones (2)"));
        assert!(output.contains("[4] Berlin (berlin)"));
        assert!(output.contains("[-] Berlin (berlin)"));
    }

    #[test]
    fn test_format_zone_skips_missing_fields() {
        plain();
        let output = ConsoleFormatter::format_zone(&zone());
        assert!(output.contains("Since: 01.01.2010"));
        assert!(output.contains("Cities: Berlin"));
        assert!(!output.contains("Badge online"));
    }

    #[test]
    fn test_format_circuits_uses_pattern() {
        plain();
        let since = DatePattern::default().parse_date("01.01.2020").unwrap();
        let circuit = Circuit::new(vec![
            GeoPoint::new(52.5, 13.4).unwrap(),
            GeoPoint::new(52.6, 13.5).unwrap(),
        ])
        .with_valid_since(since)
        .with_zone_number(ZoneNumber::Green);

        let output = ConsoleFormatter::format_circuits("berlin", &[circuit], &DatePattern::default());
        assert!(output.contains("1 circuits, 2 points"));
        assert!(output.contains("#1 2 points, valid since 01.01.2020, zone [4]"));
    }

    #[test]
    fn test_format_circuits_json_groups_by_zone() {
        let circuit = Circuit::new(vec![GeoPoint::new(52.5, 13.4).unwrap()]);
        let circuits = vec![circuit];
        let empty: Vec<Circuit> = Vec::new();
        let output = ConsoleFormatter::format_circuits_json(&[
            ("berlin", circuits.as_slice()),
            ("bonn", empty.as_slice()),
        ]);

        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value[0]["zone"], "berlin");
        assert_eq!(value[0]["circuits"][0]["points"][0]["lat"], 52.5);
        assert_eq!(value[1]["circuits"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn test_format_json() {
        let output = ConsoleFormatter::format_json(&[Faq::new("Q", "A")]);
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value[0]["question"], "Q");
    }
}
