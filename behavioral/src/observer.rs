//! Pattern 6: Observer
//!
//! The newsletter holds its subscribers behind one observer trait and
//! fans every published event out in subscription order, collecting each
//! reaction line.

pub trait Observer {
    fn on_event(&self, event: &str) -> String;
}

pub struct EmailAlert {
    address: String,
}

impl EmailAlert {
    pub fn new(address: impl Into<String>) -> Self {
        EmailAlert {
            address: address.into(),
        }
    }
}

impl Observer for EmailAlert {
    fn on_event(&self, event: &str) -> String {
        format!("email to {}: {}", self.address, event)
    }
}

pub struct SmsAlert {
    number: String,
}

impl SmsAlert {
    pub fn new(number: impl Into<String>) -> Self {
        SmsAlert {
            number: number.into(),
        }
    }
}

impl Observer for SmsAlert {
    fn on_event(&self, event: &str) -> String {
        format!("sms to {}: {}", self.number, event)
    }
}

#[derive(Default)]
pub struct Newsletter {
    subscribers: Vec<Box<dyn Observer>>,
}

impl Newsletter {
    pub fn new() -> Self {
        Newsletter {
            subscribers: Vec::new(),
        }
    }

    pub fn subscribe(&mut self, observer: Box<dyn Observer>) {
        self.subscribers.push(observer);
    }

    pub fn publish(&self, event: &str) -> Vec<String> {
        self.subscribers.iter().map(|s| s.on_event(event)).collect()
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn publish_fans_out_in_subscription_order() {
        let mut newsletter = Newsletter::new();
        newsletter.subscribe(Box::new(EmailAlert::new("a@example.com")));
        newsletter.subscribe(Box::new(SmsAlert::new("555-0100")));
        newsletter.subscribe(Box::new(EmailAlert::new("b@example.com")));

        assert_eq!(
            newsletter.publish("issue 12 out"),
            vec![
                "email to a@example.com: issue 12 out",
                "sms to 555-0100: issue 12 out",
                "email to b@example.com: issue 12 out",
            ]
        );
    }

    #[test]
    fn no_subscribers_means_an_empty_trace() {
        assert_eq!(Newsletter::new().publish("unheard"), Vec::<String>::new());
    }

    #[test]
    fn publishing_twice_replays_the_same_trace() {
        let mut newsletter = Newsletter::new();
        newsletter.subscribe(Box::new(SmsAlert::new("555-0100")));
        assert_eq!(newsletter.publish("ping"), newsletter.publish("ping"));
    }
}
