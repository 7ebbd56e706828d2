//! # Tickets and pages

/// Formats ticket numbers with a fixed number of digits
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TicketFormatter {
    digit_width: usize,
}

impl TicketFormatter {
    /// Create a formatter that pads to the number of digits in `max`
    pub fn new(max: u32) -> Self {
        Self {
            digit_width: decimal_digit_count(max),
        }
    }

    /// The length of every formatted number
    pub fn digit_width(&self) -> usize {
        self.digit_width
    }

    /// Left-pad `value` with zeros
    pub fn format(&self, value: u32) -> String {
        format!("{:0width$}", value, width = self.digit_width)
    }

    /// Create a ticket for `value`
    pub fn ticket(&self, value: u32) -> Ticket {
        Ticket {
            value,
            text: self.format(value),
        }
    }
}

/// Number of base-10 digits of `value`
pub fn decimal_digit_count(mut value: u32) -> usize {
    let mut count = 1;
    while value >= 10 {
        value /= 10;
        count += 1;
    }
    count
}

/// A single raffle ticket
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    /// The allocated number
    pub value: u32,
    /// The number as printed on the ticket
    pub text: String,
}

/// The tickets on one sheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// 1-based index of the sheet
    pub index: u32,
    /// Tickets in grid order (row by row)
    pub tickets: Vec<Ticket>,
}

impl Page {
    /// The printed numbers, in grid order
    pub fn numbers(&self) -> impl Iterator<Item = &str> + '_ {
        self.tickets.iter().map(|t| t.text.as_str())
    }
}
