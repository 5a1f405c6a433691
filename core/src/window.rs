/// Tidsavgrenset vindu med høydemålinger (meter) for én del av en dag.
///
/// Vinduet er "komplett" når det har gått mer enn `span_secs` siden start,
/// eller når alle plassene er brukt.
#[derive(Debug, Clone)]
pub struct WindowBuffer {
    start: u64, // 0 = ikke startet
    slots: Vec<u32>,
    capacity: usize,
    span_secs: u64,
}

impl WindowBuffer {
    pub fn new(capacity: usize, span_secs: u64) -> Self {
        Self {
            start: 0,
            slots: Vec::with_capacity(capacity),
            capacity,
            span_secs,
        }
    }

    pub fn start(&self) -> u64 {
        self.start
    }

    /// Sekunder siden vinduet startet. 0 hvis det ikke er startet.
    /// Klokke som går bakover gir et stort sprang, dvs. utløpt vindu.
    pub fn elapsed(&self, timestamp: u64) -> u64 {
        if self.start == 0 {
            0
        } else {
            timestamp.wrapping_sub(self.start)
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.slots.len() >= self.capacity
    }

    pub fn is_expired(&self, elapsed: u64) -> bool {
        elapsed > self.span_secs
    }

    pub fn is_complete(&self, elapsed: u64) -> bool {
        self.is_expired(elapsed) || self.is_full()
    }

    /// Legger til en høyde. `false` hvis vinduet allerede er fullt.
    pub fn push(&mut self, height_m: u32) -> bool {
        if self.is_full() {
            return false;
        }
        self.slots.push(height_m);
        true
    }

    /// Median (øvre midtre for partall), dvs. element `len / 2` etter sortering.
    pub fn median(&mut self) -> Option<u32> {
        self.slots.sort_unstable();
        self.slots.get(self.slots.len() / 2).copied()
    }

    /// Ny løpende minimumsverdi: medianen hvis den er strengt lavere, ellers `running_min`.
    /// Tomt vindu endrer ingenting.
    pub fn evaluate(&mut self, running_min: u32) -> u32 {
        match self.median() {
            Some(m) if m < running_min => m,
            _ => running_min,
        }
    }

    pub fn reset(&mut self, start: u64) {
        self.start = start;
        self.slots.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn median_picks_upper_middle_for_even_len() {
        let mut w = WindowBuffer::new(8, 3600);
        for h in [40, 10, 30, 20] {
            w.push(h);
        }
        // sortert: 10 20 30 40 -> index 2
        assert_eq!(w.median(), Some(30));
    }

    #[test]
    fn unset_start_gives_zero_elapsed() {
        let w = WindowBuffer::new(4, 3600);
        assert_eq!(w.elapsed(1_700_000_000), 0);
    }

    #[test]
    fn complete_on_time_or_slots() {
        let mut w = WindowBuffer::new(2, 3600);
        w.reset(1000);
        assert!(!w.is_complete(w.elapsed(4600)));
        assert!(w.is_complete(w.elapsed(4601)));

        assert!(w.push(1));
        assert!(w.push(2));
        assert!(!w.push(3));
        assert!(w.is_complete(0));
    }

    #[test]
    fn empty_window_keeps_running_min() {
        let mut w = WindowBuffer::new(4, 3600);
        assert!(w.is_empty());
        assert_eq!(w.evaluate(700), 700);
    }

    #[test]
    fn clock_going_backwards_expires_window() {
        let mut w = WindowBuffer::new(4, 3600);
        w.reset(1000);
        assert!(w.is_expired(w.elapsed(999)));
    }
}
