use colored::Colorize;

pub fn header(title: &str) {
    println!("{}", title.bold().underline());
}

pub fn field(label: &str, value: &str) {
    println!("{}", render_field(label, value));
}

pub fn hint(msg: &str) {
    println!("{}", render_hint(msg));
}

pub fn success(msg: &str) {
    println!("{}", render_success(msg));
}

fn render_field(label: &str, value: &str) -> String {
    format!("  {} {}", format!("{label}:").dimmed(), value.cyan())
}

fn render_hint(msg: &str) -> String {
    format!("{} {}", "hint:".cyan().bold(), msg.dimmed())
}

fn render_success(msg: &str) -> String {
    format!("{} {}", "✓".green().bold(), msg)
}
