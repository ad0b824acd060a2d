//! Plain-text rendering of a simulation run

use std::fmt;

use crate::sim::SimulationRun;

/// Render the run the way the dashboard wrote it out, one section per
/// component
pub fn render_text(run: &SimulationRun) -> String {
    run.to_string()
}

impl fmt::Display for SimulationRun {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let spreading = &self.spreading;
        writeln!(f, "CDMA Spreading")?;
        writeln!(f, "  Chips:            {}", format_signs(&spreading.chips))?;
        writeln!(f, "  Data bits:        {}", format_signs(&spreading.data_bits))?;
        writeln!(f, "  Composite signal: {}", format_samples(&spreading.composite))?;
        if let Some(first) = spreading.user_signal(0) {
            writeln!(f, "  User 1 spread:    {}", format_samples(&first))?;
        }
        writeln!(f)?;

        writeln!(f, "Power Control")?;
        writeln!(f, "  Path loss: {:.4}", self.power.path_loss)?;
        for (user, power) in self.power.received_power.iter().enumerate() {
            writeln!(f, "  User {}: {:.4}", user + 1, power)?;
        }
        writeln!(f)?;

        let handover = &self.handover;
        writeln!(f, "Handover Decision")?;
        writeln!(
            f,
            "  At {:.1} km, user connects to {}",
            self.params.distance_km(),
            handover.winner
        )?;
        writeln!(
            f,
            "  Cell A: {:.4} | Cell B: {:.4}",
            handover.cell_a_strength, handover.cell_b_strength
        )?;
        if let Some(estimate) = &self.handover_win_rate {
            writeln!(
                f,
                "  Cell A win rate: {:.1}% over {} draws",
                estimate.cell_a_rate * 100.0,
                estimate.trials
            )?;
        }
        writeln!(f)?;

        writeln!(f, "QoS Class")?;
        writeln!(f, "  Selected QoS Class: {}", self.params.qos_class())?;
        writeln!(f, "  - Latency: {}", self.qos.latency)?;
        write!(f, "  - Data Rate: {}", self.qos.data_rate)
    }
}

fn format_signs(values: &[i8]) -> String {
    values
        .iter()
        .map(|&v| if v > 0 { "+1" } else { "-1" })
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_samples(values: &[f64]) -> String {
    values
        .iter()
        .map(|v| format!("{v:+.0}"))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{QosClass, SimulationParameters};
    use crate::sim::run_seeded;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_report_sections() {
        let params = SimulationParameters::new(3, 8, 1.0, QosClass::Conversational).unwrap();
        let run = run_seeded(&params, 1);
        let text = render_text(&run);

        assert!(text.contains(&format!(
            "At 1.0 km, user connects to {}",
            run.handover.winner
        )));
        assert!(text.contains("Selected QoS Class: Conversational"));
        assert!(text.contains("- Latency: Very Low"));
        assert!(text.ends_with("- Data Rate: Medium"));
        assert!(text.contains("User 3: 1.0000"));
        assert!(!text.contains("win rate"));
    }

    #[test]
    fn test_report_includes_win_rate() {
        let params = SimulationParameters::new(2, 4, 4.5, QosClass::Background).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        let run = crate::sim::run(&params, &mut rng).with_win_rate(&mut rng, 1000);

        // at 4.5 km cell B always wins
        assert!(render_text(&run).contains("Cell A win rate: 0.0% over 1000 draws"));
    }

    #[test]
    fn test_format_helpers() {
        assert_eq!(format_signs(&[1, -1, 1]), "+1 -1 +1");
        assert_eq!(format_samples(&[3.0, -1.0, 0.0]), "+3 -1 +0");
    }
}
