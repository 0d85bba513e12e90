//! Ordering of composed itineraries.
//!
//! Each result category has its own sort key. Ties beyond the specified
//! keys break on flight numbers so that repeated searches over an
//! unchanged leg set return identically ordered results.

use crate::domain::Itinerary;

/// Order direct itineraries by departure time.
pub fn rank_direct(itineraries: &mut [Itinerary]) {
    itineraries.sort_by(|a, b| {
        let dep_a = a.legs()[0].departure();
        let dep_b = b.legs()[0].departure();
        dep_a.cmp(&dep_b).then_with(|| flight_numbers(a).cmp(&flight_numbers(b)))
    });
}

/// Order one-stop itineraries by total flight time ascending, tie-broken
/// by layover duration ascending.
pub fn rank_one_stop(itineraries: &mut [Itinerary]) {
    itineraries.sort_by(|a, b| {
        a.total_flight_minutes()
            .cmp(&b.total_flight_minutes())
            .then_with(|| a.total_layover_minutes().cmp(&b.total_layover_minutes()))
            .then_with(|| flight_numbers(a).cmp(&flight_numbers(b)))
    });
}

/// Order two-stop itineraries by total travel time (flight durations plus
/// layovers) ascending, tie-broken by first layover ascending.
pub fn rank_two_stop(itineraries: &mut [Itinerary]) {
    itineraries.sort_by(|a, b| {
        a.total_travel_minutes()
            .cmp(&b.total_travel_minutes())
            .then_with(|| first_layover(a).cmp(&first_layover(b)))
            .then_with(|| flight_numbers(a).cmp(&flight_numbers(b)))
    });
}

fn first_layover(itinerary: &Itinerary) -> i64 {
    itinerary.layovers().first().map_or(0, |l| l.minutes())
}

fn flight_numbers(itinerary: &Itinerary) -> Vec<&str> {
    itinerary.legs().iter().map(|l| l.flight_number()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AirportCode, ClockTime, FlightLeg, Layover, RiskTier};

    fn code(s: &str) -> AirportCode {
        AirportCode::parse(s).unwrap()
    }

    fn time(s: &str) -> ClockTime {
        ClockTime::parse_hhmm(s).unwrap()
    }

    fn leg(number: &str, origin: &str, destination: &str, dep: &str, arr: &str, mins: i64) -> FlightLeg {
        FlightLeg::new(
            number,
            "PR",
            "Philippine Airlines",
            code(origin),
            code(destination),
            time(dep),
            time(arr),
            mins,
        )
        .unwrap()
    }

    fn one_stop(first: FlightLeg, second: FlightLeg, layover_mins: i64) -> Itinerary {
        let airport = first.destination();
        Itinerary::one_stop(
            first,
            second,
            Layover::new(airport, layover_mins, false, false, RiskTier::Medium).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn direct_by_departure_time() {
        let mut results = vec![
            Itinerary::direct(leg("PR103", "MNL", "NRT", "14:40", "19:10", 270)),
            Itinerary::direct(leg("PR101", "MNL", "NRT", "07:25", "11:55", 270)),
        ];
        rank_direct(&mut results);

        let numbers: Vec<&str> = results
            .iter()
            .map(|i| i.legs()[0].flight_number())
            .collect();
        assert_eq!(numbers, vec!["PR101", "PR103"]);
    }

    #[test]
    fn one_stop_by_flight_time_then_layover() {
        // Slower flights, short layover
        let slow = one_stop(
            leg("AA100", "POM", "MNL", "02:40", "05:20", 200),
            leg("AA200", "MNL", "LAX", "10:00", "06:00", 700),
            280,
        );
        // Faster flights, long layover: wins on flight time
        let fast = one_stop(
            leg("BB100", "POM", "MNL", "03:00", "05:30", 150),
            leg("BB200", "MNL", "LAX", "12:00", "08:00", 700),
            390,
        );
        // Same flight time as `fast` but shorter layover: wins the tie
        let fast_short_layover = one_stop(
            leg("CC100", "POM", "MNL", "04:00", "06:30", 150),
            leg("CC200", "MNL", "LAX", "09:30", "05:30", 700),
            180,
        );

        let mut results = vec![slow, fast, fast_short_layover];
        rank_one_stop(&mut results);

        let first_numbers: Vec<&str> = results
            .iter()
            .map(|i| i.legs()[0].flight_number())
            .collect();
        assert_eq!(first_numbers, vec!["CC100", "BB100", "AA100"]);
    }

    #[test]
    fn two_stop_by_total_travel_time() {
        let make = |prefix: &str, l1: i64, l2: i64, flight_mins: i64| {
            let first = leg(
                &format!("{prefix}1"),
                "POM",
                "MNL",
                "02:40",
                "05:20",
                flight_mins,
            );
            let second = leg(&format!("{prefix}2"), "MNL", "NRT", "09:45", "15:10", 265);
            let third = leg(&format!("{prefix}3"), "NRT", "LAX", "19:05", "12:30", 605);
            Itinerary::two_stop(
                first,
                second,
                third,
                [
                    Layover::new(code("MNL"), l1, true, true, RiskTier::Low).unwrap(),
                    Layover::new(code("NRT"), l2, true, true, RiskTier::Low).unwrap(),
                ],
            )
            .unwrap()
        };

        // total travel = flights + layovers
        let long = make("AA", 400, 300, 200); // 265+605+200 + 700 = 1770
        let short = make("BB", 200, 235, 160); // 265+605+160 + 435 = 1465
        // Same total as `short` but larger first layover loses the tie
        let short_late = make("CC", 260, 175, 160); // same 1465 total

        let mut results = vec![long, short_late.clone(), short.clone()];
        rank_two_stop(&mut results);

        assert_eq!(results[0], short);
        assert_eq!(results[1], short_late);
        assert_eq!(results[2].legs()[0].flight_number(), "AA1");
    }
}
