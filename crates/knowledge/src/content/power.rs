//! Categories 7 and 8: electrical test and protection, batteries and power sources.

use crate::table::{ContentTable, RawEntry};

/// Categories 7-8.
pub static TEST_AND_POWER: ContentTable<'static> = ContentTable::new("test-and-power", ENTRIES);

const ENTRIES: &[RawEntry<'static>] = &[
    RawEntry {
        key: "7-01",
        overview: "Use a digital multimeter to measure voltage, current, resistance and continuity safely and accurately. The multimeter is the first tool in almost every electrical troubleshooting task, and a wrong range or lead position can destroy the meter or injure the technician.",
        study_guide: &[
            "Select the function before connecting the leads, and start on the highest range when the expected value is unknown.",
            "Voltage is measured in parallel with the circuit; current is measured in series by breaking the circuit.",
            "Resistance and continuity are measured only on de-energized circuits.",
            "Use a meter whose measurement category rating matches or exceeds the circuit being tested.",
            "Inspect test leads for cracked insulation and exposed metal before each use.",
            "A voltage drop test across a closed switch or connector under load reveals resistance a static resistance check may miss.",
        ],
        pro_tips: &[
            "Check the meter on a known live source before and after testing a circuit you believe is dead.",
            "Leaving the red lead in the current jack is the most common way to blow a meter fuse.",
            "Use the min/max recording mode to catch intermittent dropouts.",
        ],
        references: &[
            "FAA-H-8083-30B — Aviation Maintenance Technician Handbook—General",
            "IEC 61010-1 — Safety Requirements for Electrical Equipment for Measurement, Control, and Laboratory Use",
            "FAA AC 43.13-1B — Acceptable Methods, Techniques, and Practices: Aircraft Inspection and Repair, Chapter 11",
        ],
    },
    RawEntry {
        key: "7-02",
        overview: "Perform insulation resistance tests on wiring with a megohmmeter to detect insulation breakdown before it causes a short or arc. Insulation damage that is invisible from outside the bundle can still leak current to structure under high voltage.",
        study_guide: &[
            "Disconnect all equipment, especially avionics and semiconductors, from the circuit under test; the test voltage can destroy them.",
            "Select the test voltage specified by the manual; typical aircraft wiring tests use 500 VDC.",
            "Measure between each conductor and structure and between adjacent conductors as the procedure requires.",
            "Compare readings against the manual's minimum; readings that are low but passing warrant further investigation.",
            "Discharge the circuit after testing; long cables store a charge.",
            "Record the readings so that degradation trends can be seen across inspections.",
        ],
        pro_tips: &[
            "Tag every disconnected connector so nothing is left disconnected after the test.",
            "Humidity lowers readings; note ambient conditions with the results.",
            "If a reading drifts upward during the test, let it settle; cable capacitance is charging.",
        ],
        references: &[
            "FAA AC 43.13-1B — Acceptable Methods, Techniques, and Practices: Aircraft Inspection and Repair, Chapter 11",
            "SAE AS50881 — Wiring, Aerospace Vehicle",
            "NAVAIR 01-1A-505-1 — Installation and Repair Practices, Aircraft Electric and Electronic Wiring",
        ],
    },
    RawEntry {
        key: "7-03",
        overview: "Locate open and short circuits in installed wiring using continuity checks and time-domain reflectometry (TDR). Finding the exact fault location avoids removing long runs of wiring and the collateral damage that comes with opening up bundles.",
        study_guide: &[
            "Start from the wiring diagram and isolate the circuit at connectors so each segment can be checked separately.",
            "A continuity check with a jumper wire at the far end confirms a conductor end to end.",
            "A TDR sends a pulse down the wire and times the reflection; distance to the fault is computed from the velocity of propagation.",
            "Set the velocity of propagation for the wire type under test; a wrong value moves the indicated fault location.",
            "Open circuits reflect a positive pulse and short circuits a negative pulse on most TDR displays.",
            "Confirm the location physically before cutting into a bundle.",
        ],
        pro_tips: &[
            "Shoot the TDR from both ends; where the two distances agree is where the fault is.",
            "Flex the bundle while watching the meter to find intermittent faults.",
            "Measure a known-good wire in the same bundle first to calibrate your expectations.",
        ],
        references: &[
            "FAA AC 43.13-1B — Acceptable Methods, Techniques, and Practices: Aircraft Inspection and Repair, Chapter 11",
            "FAA-H-8083-31B — Aviation Maintenance Technician Handbook—Airframe",
            "NAVAIR 01-1A-505-1 — Installation and Repair Practices, Aircraft Electric and Electronic Wiring",
        ],
    },
    RawEntry {
        key: "7-04",
        overview: "Inspect and replace circuit breakers and other circuit protection devices. Protection devices are sized to protect the wire, not the equipment; an oversized or defeated breaker turns a short circuit into a wiring fire.",
        study_guide: &[
            "Circuit protection is rated to open before the wire it protects reaches its temperature limit.",
            "Replace a breaker only with the part number and rating shown in the illustrated parts catalog.",
            "Do not reset a tripped breaker in flight more than once unless the flight manual allows it; repeated resets feed a fault.",
            "Never hold a breaker in or use it as a routine switch unless it is designed as a switch-breaker.",
            "Arc fault circuit breakers detect arcing signatures that a thermal breaker would not respond to.",
            "Check breaker terminals for heat discoloration and correct torque during inspection.",
        ],
        pro_tips: &[
            "A breaker that trips repeatedly is telling you something; troubleshoot the circuit before replacing the breaker.",
            "Use breaker collars to secure pulled breakers during maintenance and tag them.",
        ],
        references: &[
            "14 CFR 25.1357 — Circuit protective devices",
            "SAE AS58091 — Circuit Breakers, Trip-Free, Aircraft",
            "FAA AC 43.13-1B — Acceptable Methods, Techniques, and Practices: Aircraft Inspection and Repair, Chapter 11",
        ],
    },
    RawEntry {
        key: "7-05",
        overview: "Test and replace relays and contactors that switch aircraft loads. Worn contacts cause voltage drop and heating under load, and a welded contactor can leave a bus energized when the crew expects it to be dead.",
        study_guide: &[
            "Verify coil resistance against the component data before assuming a relay is at fault.",
            "Measure voltage drop across closed contacts under load; high drop indicates pitted or burned contacts.",
            "Check for diode or suppression components across the coil and install them with correct polarity.",
            "Replacement relays must match contact rating, coil voltage and mounting configuration.",
            "Torque power terminals to the specified value; loose terminals overheat.",
        ],
        pro_tips: &[
            "Listen for the click, but do not trust it; a relay can click and still not make contact.",
            "Swap with an identical relay in a non-critical position to confirm a fault, if the manual permits.",
        ],
        references: &[
            "MIL-PRF-6106 — Relays, Electromagnetic, General Specification for",
            "MIL-PRF-83536 — Relays, Electromagnetic, Established Reliability, General Specification for",
            "FAA AC 43.13-1B — Acceptable Methods, Techniques, and Practices: Aircraft Inspection and Repair, Chapter 11",
        ],
    },
    RawEntry {
        key: "8-01",
        overview: "Service lead-acid aircraft batteries: inspection, electrolyte check, charging and capacity testing. Lead-acid batteries vent hydrogen while charging and contain sulfuric acid, so servicing is both a reliability task and a personal-safety task.",
        study_guide: &[
            "Check open-cell electrolyte level and top up with distilled water only, after charging unless the manual says otherwise.",
            "Specific gravity indicates state of charge; correct hydrometer readings for temperature.",
            "Charge in a ventilated area away from sparks and flames; hydrogen accumulates near the ceiling.",
            "Perform capacity tests at the interval specified; a battery that cannot deliver rated capacity is removed from service.",
            "Neutralize acid spills with sodium bicarbonate solution and rinse with water.",
            "Never service lead-acid and nickel-cadmium batteries in the same area or with the same tools.",
        ],
        pro_tips: &[
            "Wear a face shield, not just safety glasses, when working with electrolyte.",
            "Grease terminals lightly with the specified compound after cleaning to slow corrosion.",
            "Know where the eyewash station is before opening the first cell cap.",
        ],
        references: &[
            "FAA AC 43.13-1B — Acceptable Methods, Techniques, and Practices: Aircraft Inspection and Repair, Chapter 11",
            "FAA-H-8083-30B — Aviation Maintenance Technician Handbook—General",
            "29 CFR 1910.151(c) — Medical services and first aid: eye and body flushing facilities",
        ],
    },
    RawEntry {
        key: "8-02",
        overview: "Service nickel-cadmium aircraft batteries, including deep cycling, cell equalization and thermal runaway awareness. NiCad batteries tolerate high discharge rates but can enter thermal runaway if overcharged or poorly maintained, which can destroy the battery and its compartment.",
        study_guide: &[
            "NiCad electrolyte is potassium hydroxide; specific gravity does not indicate state of charge.",
            "Electrolyte level is only checked and adjusted at the end of charge, when it is highest.",
            "Deep cycling discharges cells individually to zero and recharges them to restore capacity and balance.",
            "Cell imbalance is a precursor to thermal runaway; measure individual cell voltages during servicing.",
            "Temperature monitoring systems in the battery compartment warn of overheating; test them per the manual.",
            "Neutralize electrolyte spills with boric acid solution and use separate tools from lead-acid work.",
        ],
        pro_tips: &[
            "White crystals around cell vents indicate overfilling or overcharging; clean them off and investigate.",
            "Keep a log of cell voltages per battery serial number; weak cells show up as a trend.",
        ],
        references: &[
            "FAA AC 00-33B — Nickel-Cadmium Battery Operational, Maintenance, and Overhaul Practices",
            "FAA AC 43.13-1B — Acceptable Methods, Techniques, and Practices: Aircraft Inspection and Repair, Chapter 11",
            "14 CFR 25.1353 — Electrical equipment and installations",
        ],
    },
    RawEntry {
        key: "8-03",
        overview: "Handle, install and inspect rechargeable lithium batteries used for main, emergency and equipment power. Lithium cells store a large amount of energy and a single cell failure can propagate into a fire that is difficult to extinguish.",
        study_guide: &[
            "Lithium batteries are installed only in approved locations with containment and venting designed for cell failure.",
            "The battery management system monitors cell voltage and temperature and disconnects the battery on fault; never bypass it.",
            "Inspect for swelling, damaged cases, electrolyte leakage and heat discoloration.",
            "Store and ship lithium batteries at the state of charge specified by the manufacturer and the dangerous goods regulations.",
            "Damaged or suspect batteries are isolated in a fire-resistant container away from other materials.",
            "Know the fire response: cool the battery with water or the approved agent and keep personnel clear of venting gases.",
        ],
        pro_tips: &[
            "A warm lithium battery on the bench with nothing connected is an emergency, not a curiosity.",
            "Check emergency locator transmitter and flashlight battery expiry dates during every inspection.",
        ],
        references: &[
            "FAA AC 20-184 — Guidance on Testing and Installation of Rechargeable Lithium Battery and Battery Systems on Aircraft",
            "RTCA DO-311A — Minimum Operational Performance Standards for Rechargeable Lithium Batteries and Battery Systems",
            "14 CFR 25.1353 — Electrical equipment and installations",
        ],
    },
    RawEntry {
        key: "8-04",
        overview: "Remove and install aircraft batteries, including connector, vent and hold-down inspection. An unsecured battery becomes a projectile in a hard landing, and a blocked vent line can let gas or electrolyte accumulate in the compartment.",
        study_guide: &[
            "Turn off all electrical power and disconnect external power before removing a battery.",
            "Disconnect the negative terminal first and reconnect it last to avoid shorting the battery through tools.",
            "Inspect quick-disconnect connectors for pitting, heat damage and correct engagement.",
            "Check vent tubes and sump jars for blockage, cracks and neutralizing agent as applicable.",
            "Secure hold-downs to the specified torque; overtightening can crack the battery case.",
            "Verify battery voltage and charge on the aircraft after installation.",
        ],
        pro_tips: &[
            "Use a battery lifting strap; aircraft batteries are heavy and awkward in tight compartments.",
            "Wrap or cap disconnected cable ends immediately.",
            "Clean the compartment while the battery is out; corrosion there is hard to reach otherwise.",
        ],
        references: &[
            "14 CFR 25.1353 — Electrical equipment and installations",
            "FAA AC 43.13-1B — Acceptable Methods, Techniques, and Practices: Aircraft Inspection and Repair, Chapter 11",
            "FAA-H-8083-31B — Aviation Maintenance Technician Handbook—Airframe",
        ],
    },
    RawEntry {
        key: "8-05",
        overview: "Connect and disconnect external ground power to the aircraft safely, verifying the supply before applying it to aircraft buses. Ground power units that deliver the wrong voltage, frequency or phase rotation can damage aircraft equipment across every bus at once.",
        study_guide: &[
            "Confirm the ground power unit type and output (28 VDC or 115/200 VAC, 400 Hz) matches the aircraft receptacle.",
            "Check the cable and plug for damage, bent pins and missing interlock pins before connecting.",
            "Connect with the ground power unit output off, then energize the unit and check its output before selecting it on the aircraft.",
            "The aircraft external power monitor rejects power outside voltage, frequency and phase limits; do not override it.",
            "Never disconnect the cable under load; switch off the aircraft selection and the unit output first.",
            "Chock the unit and route the cable so it cannot be driven over or pulled taut by aircraft movement.",
        ],
        pro_tips: &[
            "Watch the aircraft bus voltage for a few seconds after switching to external power; a sagging unit shows itself quickly.",
            "Stow the cable before towing; a connected cable is a common towing incident.",
        ],
        references: &[
            "MIL-STD-704F — Aircraft Electric Power Characteristics",
            "SAE ARP5015 — Ground Equipment - 400 Hz Ground Power Performance Requirements",
            "FAA-H-8083-31B — Aviation Maintenance Technician Handbook—Airframe",
        ],
    },
    RawEntry {
        key: "8-06",
        overview: "Inspect engine-driven DC generators and starter-generators, including brushes, commutator, drive and output regulation. A generator that is not regulated within limits overstresses every load on its bus, and worn brushes lead to sudden loss of output in flight.",
        study_guide: &[
            "Measure brush length against the wear limit and check brushes move freely in their holders.",
            "Inspect the commutator for scoring, burning and excessive wear; a smooth chocolate-brown film is normal.",
            "Check the drive spline or shaft for wear and lubrication as specified.",
            "Verify voltage regulation and paralleling with the generator control unit per the manual.",
            "Inspect cooling air ducts and blast tubes for blockage; generators depend on cooling air at full load.",
        ],
        pro_tips: &[
            "Carbon dust inside the housing is normal in small amounts; heaps of it mean brushes are wearing fast.",
            "Note the brush wear rate per operating hour so replacement can be planned before the limit.",
        ],
        references: &[
            "MIL-STD-704F — Aircraft Electric Power Characteristics",
            "FAA-H-8083-32B — Aviation Maintenance Technician Handbook—Powerplant",
            "FAA AC 43.13-1B — Acceptable Methods, Techniques, and Practices: Aircraft Inspection and Repair, Chapter 11",
        ],
    },
];
