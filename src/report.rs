use analytics::{AggregateResult, SeriesStats};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};
use configuration::OutputFormat;

/// Renders the finished aggregate in the requested format.
pub fn render(result: &AggregateResult, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(result)),
        OutputFormat::Table => Ok(render_table(result)),
        OutputFormat::Json => serde_json::to_string_pretty(result),
    }
}

/// The four facts as plain sentences, one per line.
pub fn render_text(result: &AggregateResult) -> String {
    let equilibrium = match result.equilibrium() {
        Some(eq) => format!(
            "The equilibrium price is equal to {} and the equilibrium quantity is equal to {}.",
            eq.price(),
            eq.quantity()
        ),
        None => "No equilibrium point was found.".to_string(),
    };

    let price = match result.price().range() {
        Some((lo, hi)) => format!("The minimum price is {lo}$ and the maximum price is {hi}$."),
        None => "No data for price.".to_string(),
    };

    let lines = [
        equilibrium,
        price,
        quantity_line(result.quantity_demanded(), "quantity demanded"),
        quantity_line(result.quantity_supplied(), "quantity supply"),
    ];
    lines.join("\n")
}

fn quantity_line(series: &SeriesStats, label: &str) -> String {
    match series.range() {
        Some((lo, hi)) => format!(
            "The lowest {label} is equal to {lo} and the highest {label} is equal to {hi}."
        ),
        None => format!("No data for {label}."),
    }
}

/// The same facts as a bordered table.
pub fn render_table(result: &AggregateResult) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Metric", "Lowest", "Highest"]);

    for (label, series) in [
        ("Price", result.price()),
        ("Quantity demanded", result.quantity_demanded()),
        ("Quantity supplied", result.quantity_supplied()),
    ] {
        let (lo, hi) = match series.range() {
            Some((lo, hi)) => (lo.to_string(), hi.to_string()),
            None => ("n/a".to_string(), "n/a".to_string()),
        };
        table.add_row(vec![label.to_string(), lo, hi]);
    }

    let (price, quantity) = match result.equilibrium() {
        Some(eq) => (eq.price().to_string(), eq.quantity().to_string()),
        None => ("none".to_string(), "none".to_string()),
    };
    table.add_row(vec!["Equilibrium (price / quantity)".to_string(), price, quantity]);

    table.to_string()
}

/// The demand and supply schedule: each captured price paired by position with
/// the captured demanded and supplied quantities.
///
/// Series can differ in length after skipped fields; pairing stops at the
/// shortest one.
pub fn render_schedule(result: &AggregateResult) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["Price", "Quantity demanded", "Quantity supplied"]);

    let rows = result
        .price()
        .values()
        .iter()
        .zip(result.quantity_demanded().values())
        .zip(result.quantity_supplied().values());
    for ((price, demanded), supplied) in rows {
        table.add_row(vec![price.to_string(), demanded.to_string(), supplied.to_string()]);
    }

    table.to_string()
}

const CHART_WIDTH: usize = 48;
const CHART_HEIGHT: usize = 12;

/// The demand and supply curves as a text plot: quantity on the x axis, price
/// on the y axis.
///
/// Demand points are drawn as `D`, supply points as `S`, and a cell holding
/// both as `*`. Each curve pairs the price series with its quantity series by
/// position, so a curve stops where the shorter of the two ends.
pub fn render_chart(result: &AggregateResult) -> String {
    let prices = result.price().values();
    let demand: Vec<(u64, u64)> = result
        .quantity_demanded()
        .values()
        .iter()
        .copied()
        .zip(prices.iter().copied())
        .collect();
    let supply: Vec<(u64, u64)> = result
        .quantity_supplied()
        .values()
        .iter()
        .copied()
        .zip(prices.iter().copied())
        .collect();

    let all = demand.iter().chain(&supply);
    let (Some(q_min), Some(q_max), Some(p_min), Some(p_max)) = (
        all.clone().map(|&(q, _)| q).min(),
        all.clone().map(|&(q, _)| q).max(),
        all.clone().map(|&(_, p)| p).min(),
        all.map(|&(_, p)| p).max(),
    ) else {
        return "Demand and Supply schedule\nNo data to plot.".to_string();
    };

    let mut grid = vec![vec![' '; CHART_WIDTH]; CHART_HEIGHT];
    for (points, mark) in [(&demand, 'D'), (&supply, 'S')] {
        for &(quantity, price) in points {
            let col = scale(quantity, q_min, q_max, CHART_WIDTH);
            let row = CHART_HEIGHT - 1 - scale(price, p_min, p_max, CHART_HEIGHT);
            let cell = &mut grid[row][col];
            *cell = match *cell {
                ' ' => mark,
                existing if existing == mark => mark,
                _ => '*',
            };
        }
    }

    let label_width = p_max.to_string().len().max(p_min.to_string().len());
    let mut lines = vec!["Demand and Supply schedule".to_string()];
    for (i, cells) in grid.iter().enumerate() {
        let label = if i == 0 {
            p_max.to_string()
        } else if i == CHART_HEIGHT - 1 {
            p_min.to_string()
        } else {
            String::new()
        };
        let cells: String = cells.iter().collect();
        lines.push(format!("{label:>label_width$} |{}", cells.trim_end()));
    }
    lines.push(format!("{:>label_width$} +{}", "", "-".repeat(CHART_WIDTH)));
    let q_max_label = q_max.to_string();
    lines.push(format!(
        "{:>label_width$}  {q_min:<width$}{q_max_label}",
        "",
        width = CHART_WIDTH.saturating_sub(q_max_label.len()),
    ));
    lines.push("y: price  x: quantity  D = demand, S = supply, * = both".to_string());
    lines.join("\n")
}

/// Maps `value` in `[min, max]` onto `0..cells`.
fn scale(value: u64, min: u64, max: u64, cells: usize) -> usize {
    if max == min {
        return 0;
    }
    let offset = u128::from(value - min) * (cells as u128 - 1) / u128::from(max - min);
    offset as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use analytics::AggregationEngine;
    use core_types::Record;

    fn aggregate(rows: &[&[&str]]) -> AggregateResult {
        let records = rows
            .iter()
            .map(|row| Record::new(row.iter().map(|f| f.to_string()).collect()));
        AggregationEngine::aggregate(records).unwrap()
    }

    #[test]
    fn text_report_lists_the_four_facts() {
        let result = aggregate(&[&["10", "5", "5"], &["12", "6", "6"], &["8", "3", "4"]]);
        let text = render_text(&result);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(
            lines,
            [
                "The equilibrium price is equal to 10 and the equilibrium quantity is equal to 5.",
                "The minimum price is 8$ and the maximum price is 12$.",
                "The lowest quantity demanded is equal to 3 and the highest quantity demanded is equal to 6.",
                "The lowest quantity supply is equal to 4 and the highest quantity supply is equal to 6.",
            ]
        );
    }

    #[test]
    fn text_report_states_missing_data_explicitly() {
        let result = aggregate(&[]);
        let text = render_text(&result);

        assert!(text.contains("No equilibrium point was found."));
        assert!(text.contains("No data for price."));
        assert!(text.contains("No data for quantity demanded."));
        assert!(text.contains("No data for quantity supply."));
    }

    #[test]
    fn table_report_marks_absent_values() {
        let result = aggregate(&[&["0", "x", "y"]]);
        let table = render_table(&result);

        assert!(table.contains("Price"));
        assert!(table.contains("n/a"));
        assert!(table.contains("none"));
    }

    #[test]
    fn json_report_keeps_absent_distinct_from_zero() {
        let result = aggregate(&[&["0", "x", "0"]]);
        let json = render(&result, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["price"]["lowest"], 0);
        assert!(value["quantity_demanded"]["lowest"].is_null());
        assert!(value["equilibrium"].is_null());
        assert_eq!(value["records_processed"], 1);
    }

    fn grid_rows(chart: &str) -> Vec<&str> {
        chart.lines().filter(|line| line.contains(" |")).collect()
    }

    #[test]
    fn chart_plots_demand_and_supply_against_price() {
        let result = aggregate(&[&["10", "5", "5"], &["12", "6", "6"], &["8", "3", "4"]]);
        let chart = render_chart(&result);
        let rows = grid_rows(&chart);

        assert!(chart.starts_with("Demand and Supply schedule"));
        assert_eq!(rows.len(), CHART_HEIGHT);
        // Highest price and quantity sit in the top-right corner, shared by both curves.
        assert!(rows[0].starts_with("12 |"));
        assert!(rows[0].ends_with('*'));
        // At the lowest price the curves part: demand 3, supply 4.
        let bottom = rows[CHART_HEIGHT - 1];
        assert!(bottom.starts_with(" 8 |D"));
        assert!(bottom.contains('S'));
        assert!(!bottom.contains('*'));
    }

    #[test]
    fn chart_handles_flat_and_empty_series() {
        let flat = aggregate(&[&["7", "2", "2"]]);
        let rows_text = render_chart(&flat);
        let rows = grid_rows(&rows_text);
        assert_eq!(rows.len(), CHART_HEIGHT);
        assert!(rows[CHART_HEIGHT - 1].ends_with("|*"));

        let empty = aggregate(&[&["x", "y", "z"]]);
        assert!(render_chart(&empty).contains("No data to plot."));
    }

    #[test]
    fn scale_spans_the_whole_axis() {
        assert_eq!(scale(3, 3, 6, 48), 0);
        assert_eq!(scale(6, 3, 6, 48), 47);
        assert_eq!(scale(u64::MAX, 0, u64::MAX, 12), 11);
        assert_eq!(scale(5, 5, 5, 12), 0);
    }

    #[test]
    fn schedule_pairs_series_up_to_the_shortest() {
        let result = aggregate(&[&["10", "5", "5"], &["12", "6", "x"], &["8", "3", "4"]]);
        let schedule = render_schedule(&result);

        assert!(schedule.contains("Quantity supplied"));
        let data_rows = schedule
            .lines()
            .filter(|line| line.chars().any(|c| c.is_ascii_digit()))
            .count();
        assert_eq!(data_rows, 2);
    }
}
