//! Pattern 7: Proxy
//!
//! A stand-in implements the same subject trait as the real document,
//! records who is asking, and forwards. Every call follows the same path,
//! so a replayed read produces a replayed trace.

pub trait Document {
    fn read(&self) -> Vec<String>;
}

pub struct ReportDocument {
    title: String,
}

impl ReportDocument {
    pub fn new(title: impl Into<String>) -> Self {
        ReportDocument {
            title: title.into(),
        }
    }
}

impl Document for ReportDocument {
    fn read(&self) -> Vec<String> {
        vec![format!("document: contents of {}", self.title)]
    }
}

pub struct AuditProxy {
    inner: Box<dyn Document>,
    reader: String,
}

impl AuditProxy {
    pub fn new(inner: Box<dyn Document>, reader: impl Into<String>) -> Self {
        AuditProxy {
            inner,
            reader: reader.into(),
        }
    }
}

impl Document for AuditProxy {
    fn read(&self) -> Vec<String> {
        let mut trace = vec![format!("proxy: {} requests access", self.reader)];
        trace.extend(self.inner.read());
        trace
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn proxy_checks_then_forwards() {
        let proxy = AuditProxy::new(Box::new(ReportDocument::new("Q3 revenue")), "alice");
        assert_eq!(
            proxy.read(),
            vec!["proxy: alice requests access", "document: contents of Q3 revenue"]
        );
    }

    #[test]
    fn proxies_stack_like_any_other_subject() {
        let inner = AuditProxy::new(Box::new(ReportDocument::new("Q3 revenue")), "alice");
        let outer = AuditProxy::new(Box::new(inner), "gateway");
        assert_eq!(
            outer.read(),
            vec![
                "proxy: gateway requests access",
                "proxy: alice requests access",
                "document: contents of Q3 revenue",
            ]
        );
    }

    #[test]
    fn reading_twice_replays_the_same_trace() {
        let proxy = AuditProxy::new(Box::new(ReportDocument::new("Q3 revenue")), "alice");
        assert_eq!(proxy.read(), proxy.read());
    }
}
