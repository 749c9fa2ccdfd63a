//! Helpers to convert domain data into UI-friendly view structs.

use crate::format::{format_bytes, format_count, format_decimal, format_rubles};
use crate::prediction::{HistoryLog, PredictionResult, SelectedFile};

/// Labelled value rendered as a metric card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MetricCard {
    pub label: &'static str,
    pub value: String,
}

/// One entry of the history panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryRow {
    /// `#N` badge; the newest entry carries `#1`.
    pub number: String,
    pub file_name: String,
    pub rows: String,
    pub stats: [MetricCard; 4],
}

/// File name and readable size for the drop zone caption.
pub fn file_caption(file: &SelectedFile) -> String {
    format!("{} · {}", file.name(), format_bytes(file.size()))
}

/// Cards shown under a successful result.
pub fn result_metrics(result: &PredictionResult) -> Vec<MetricCard> {
    let summary = &result.summary;
    vec![
        MetricCard {
            label: "Строк обработано",
            value: format_count(result.row_count),
        },
        MetricCard {
            label: "Средний доход",
            value: format_rubles(summary.mean),
        },
        MetricCard {
            label: "Медиана",
            value: format_rubles(summary.median),
        },
        MetricCard {
            label: "Мин / Макс",
            value: format!(
                "{} / {}",
                format_rubles(summary.min),
                format_rubles(summary.max)
            ),
        },
    ]
}

/// Leading target values with two fraction digits.
pub fn preview_values(result: &PredictionResult, limit: usize) -> Vec<String> {
    result
        .target_values
        .iter()
        .take(limit)
        .map(|value| format_decimal(*value, 2))
        .collect()
}

/// "Показаны первые N из M" caption, or `None` when nothing is hidden.
pub fn preview_caption(result: &PredictionResult, limit: usize) -> Option<String> {
    let total = result.target_values.len();
    (total > limit).then(|| {
        format!(
            "Показаны первые {} из {}",
            format_count(limit as u64),
            format_count(total as u64)
        )
    })
}

pub fn history_count_tag(history: &HistoryLog) -> String {
    if history.is_empty() {
        "Пусто".to_string()
    } else {
        format!("{} записей", history.len())
    }
}

/// Rows in chronological order, numbered newest-highest.
pub fn history_rows(history: &HistoryLog) -> Vec<HistoryRow> {
    history
        .entries()
        .iter()
        .enumerate()
        .map(|(index, entry)| HistoryRow {
            number: format!("#{}", history.display_number(index)),
            file_name: entry.file_name.clone(),
            rows: format!("{} строк", format_count(entry.row_count)),
            stats: [
                MetricCard {
                    label: "Среднее",
                    value: format_rubles(entry.summary.mean),
                },
                MetricCard {
                    label: "Медиана",
                    value: format_rubles(entry.summary.median),
                },
                MetricCard {
                    label: "Мин",
                    value: format_rubles(entry.summary.min),
                },
                MetricCard {
                    label: "Макс",
                    value: format_rubles(entry.summary.max),
                },
            ],
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::GROUP_SEPARATOR;
    use crate::prediction::PredictionSummary;

    fn result(name: &str, rows: u64, values: Vec<f64>) -> PredictionResult {
        PredictionResult {
            request_id: format!("{name}-id"),
            file_name: name.to_string(),
            row_count: rows,
            target_values: values,
            summary: PredictionSummary {
                mean: 45_210.6,
                median: 40_000.0,
                min: 12_000.0,
                max: 150_000.0,
            },
        }
    }

    fn plain(text: &str) -> String {
        text.replace(GROUP_SEPARATOR, " ")
    }

    #[test]
    fn metrics_use_rubles_and_grouping() {
        let cards = result_metrics(&result("a.csv", 12_345, vec![]));
        let values: Vec<_> = cards.iter().map(|c| plain(&c.value)).collect();
        assert_eq!(
            values,
            [
                "12 345",
                "45 211 ₽",
                "40 000 ₽",
                "12 000 ₽ / 150 000 ₽"
            ]
        );
    }

    #[test]
    fn preview_is_limited() {
        let res = result("a.csv", 7, vec![1.0, 2.5, 3.333, 4.0, 5.0, 6.0, 7.0]);
        assert_eq!(preview_values(&res, 5), ["1", "2,5", "3,33", "4", "5"]);
        assert_eq!(preview_caption(&res, 5).as_deref(), Some("Показаны первые 5 из 7"));
        assert_eq!(preview_caption(&res, 10), None);
    }

    #[test]
    fn history_rows_count_down() {
        let mut history = HistoryLog::new();
        assert_eq!(history_count_tag(&history), "Пусто");
        history.append(result("first.csv", 10, vec![]));
        history.append(result("second.csv", 2_000, vec![]));

        let rows = history_rows(&history);
        assert_eq!(history_count_tag(&history), "2 записей");
        assert_eq!(rows[0].number, "#2");
        assert_eq!(rows[0].file_name, "first.csv");
        assert_eq!(rows[1].number, "#1");
        assert_eq!(plain(&rows[1].rows), "2 000 строк");
        assert_eq!(plain(&rows[1].stats[3].value), "150 000 ₽");
    }
}
