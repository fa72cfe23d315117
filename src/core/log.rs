use crate::db::pool::DbPool;
use crate::errors::AppResult;
use ansi_term::Colour;

const OP_TARGET_MAX: usize = 60;

/// ANSI colour for an audit operation name
fn color_for_operation(op: &str) -> Colour {
    match op {
        "log" => Colour::Green,
        "report" => Colour::Blue,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

struct AuditEntry {
    id: i64,
    date: String,
    operation: String,
    target: String,
    message: String,
}

impl AuditEntry {
    /// `operation (target)`, cut to `OP_TARGET_MAX` visible characters.
    fn op_target(&self) -> String {
        let full = if self.target.is_empty() {
            self.operation.clone()
        } else {
            format!("{} ({})", self.operation, self.target)
        };

        if full.chars().count() > OP_TARGET_MAX {
            let mut s: String = full.chars().take(OP_TARGET_MAX - 3).collect();
            s.push_str("...");
            s
        } else {
            full
        }
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &DbPool) -> AppResult<()> {
        let mut stmt = pool.conn.prepare_cached(
            "SELECT id, date, operation, target, message FROM log ORDER BY id ASC",
        )?;

        let rows = stmt.query_map([], |row| {
            let raw_date: String = row.get(1)?;
            let date = chrono::DateTime::parse_from_rfc3339(&raw_date)
                .map(|dt| dt.format("%FT%T%:z").to_string())
                .unwrap_or(raw_date);

            Ok(AuditEntry {
                id: row.get(0)?,
                date,
                operation: row.get(2)?,
                target: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
                message: row.get(4)?,
            })
        })?;

        let mut entries = Vec::new();
        for r in rows {
            entries.push(r?);
        }

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let op_w = entries
            .iter()
            .map(|e| e.op_target().chars().count())
            .max()
            .unwrap_or(10);
        let id_w = entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = entries.iter().map(|e| e.date.len()).max().unwrap_or(10);

        println!("📜 Internal log:\n");

        for e in &entries {
            let visible = e.op_target();
            let padding = " ".repeat(op_w.saturating_sub(visible.chars().count()));

            // only the operation word is coloured
            let colour = color_for_operation(&e.operation);
            let painted = match visible.split_once(' ') {
                Some((op_word, rest)) => format!("{} {}", colour.paint(op_word), rest),
                None => colour.paint(visible.as_str()).to_string(),
            };

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                e.id,
                e.date,
                painted,
                padding,
                e.message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}
