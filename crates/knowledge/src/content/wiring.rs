//! Categories 5 and 6: wiring practices, bonding, grounding and shielding.

use crate::table::{ContentTable, RawEntry};

/// Categories 5-6.
pub static WIRING_AND_BONDING: ContentTable<'static> = ContentTable::new("wiring-and-bonding", ENTRIES);

const ENTRIES: &[RawEntry<'static>] = &[
    RawEntry {
        key: "5-01",
        overview: "Select and identify aircraft wire so that every conductor in a harness can carry its load without overheating, survive its environment, and be traced back to its circuit during troubleshooting. Wrong wire type or gauge is a latent fire and failure hazard that no later inspection can reliably catch.",
        study_guide: &[
            "Wire gauge is chosen from both continuous current capacity and allowable voltage drop; the larger of the two requirements governs.",
            "Bundled wires and wires at altitude carry less current than a single wire in free air, so apply the bundle and altitude derating curves.",
            "MIL-DTL-22759 covers fluoropolymer-insulated copper and copper-alloy wire; MIL-DTL-27500 covers shielded and jacketed cable built from it.",
            "Wire identification is printed on the insulation or on sleeves at intervals of no more than 15 inches and within 3 inches of each end.",
            "Identification codes typically encode circuit function, wire number, segment letter and gauge; follow the aircraft wiring diagram manual.",
            "Never substitute a smaller gauge or a lower temperature-rated insulation without engineering approval.",
            "Aluminum wire requires its own terminals and torque values and is normally limited to 6 AWG and larger.",
        ],
        pro_tips: &[
            "Check the wiring diagram manual effectivity before ordering wire; dash numbers differ between model variants.",
            "Hot-stamp marking can damage thin-wall insulation; use laser marking or printed sleeves where the manual calls for it.",
            "Keep a scrap of the removed wire to compare insulation color and construction with the replacement.",
        ],
        references: &[
            "FAA AC 43.13-1B — Acceptable Methods, Techniques, and Practices: Aircraft Inspection and Repair, Chapter 11",
            "SAE AS50881 — Wiring, Aerospace Vehicle",
            "MIL-DTL-22759 — Wire, Electrical, Fluoropolymer-Insulated, Copper or Copper Alloy",
        ],
    },
    RawEntry {
        key: "5-02",
        overview: "Route and support wire bundles so that they cannot chafe, overheat, or be damaged by fluids and moving parts. Most in-service wiring faults start as chafe at a poorly supported bundle, and chafed wiring near fuel or hydraulic lines is a recognised cause of in-flight fires.",
        study_guide: &[
            "Support bundles with cushioned clamps at intervals of no more than 24 inches, closer where vibration is severe.",
            "Maintain at least 3 inches of separation from fuel, oil and hydraulic lines; where unavoidable, route wiring above the fluid line.",
            "Minimum bend radius is ten times the bundle diameter for unshielded wire, unless the manufacturer states otherwise.",
            "Drip loops keep fluids from tracking along a bundle into connectors and equipment.",
            "Allow slack for removal of components and for movement at shock-mounted equipment, but not enough to let the bundle contact structure.",
            "Protect bundles passing through holes in structure with grommets or cushioned clamps so they are not in contact with the edge.",
            "Never attach wiring to fluid lines or use them as a support.",
        ],
        pro_tips: &[
            "Run a gloved hand along the bundle after installation; anything that catches the glove will eventually catch the wire.",
            "Clamp cushions harden with age and heat; replace cracked cushions rather than reusing them.",
            "Photograph original routing before disturbing a bundle in a congested area.",
        ],
        references: &[
            "FAA AC 43.13-1B — Acceptable Methods, Techniques, and Practices: Aircraft Inspection and Repair, Chapter 11",
            "SAE AS50881 — Wiring, Aerospace Vehicle",
            "14 CFR 25.1707 — System separation: EWIS",
        ],
    },
    RawEntry {
        key: "5-03",
        overview: "Crimp solderless terminals and splices so that the joint is mechanically and electrically equivalent to continuous wire. A poor crimp produces a high-resistance joint that heats under load, loosens with vibration, and fails intermittently long before it fails completely.",
        study_guide: &[
            "Match terminal or splice size to the wire gauge using the color code or part number; never double up wires in a barrel not rated for it.",
            "Strip only the length the terminal calls for and inspect for nicked or cut strands before crimping.",
            "Use only the crimp tool, die and locator specified for the terminal; calibrated ratcheting tools must complete their full cycle.",
            "Inspect the finished crimp for centered indentation, visible conductor at the inspection hole and undamaged insulation support.",
            "A pull test to the specified value confirms crimp tool setup; perform it on sample crimps, not on installed wiring.",
            "Environmentally sealed splices must be heat-shrunk until sealant flows from both ends.",
        ],
        pro_tips: &[
            "Check the tool's calibration label before the job, not after.",
            "Stagger splices in a bundle so the bundle diameter does not bulge at one point.",
            "If a crimp looks off-center, cut it out; re-crimping a barrel never fixes it.",
        ],
        references: &[
            "SAE AS7928 — Terminals, Lug: Splices, Conductor: Crimp Style, Copper",
            "NASA-STD-8739.4 — Workmanship Standard for Crimping, Interconnecting Cables, Harnesses, and Wiring",
            "FAA AC 43.13-1B — Acceptable Methods, Techniques, and Practices: Aircraft Inspection and Repair, Chapter 11",
        ],
    },
    RawEntry {
        key: "5-04",
        overview: "Inspect, disassemble and reassemble circular connectors, including contact removal and insertion, without damaging contacts, seals or inserts. Connectors are the most frequently disturbed part of any wiring system and a damaged grommet or unseated contact causes moisture ingress and intermittent faults.",
        study_guide: &[
            "Identify the connector series and shell style from its part number before selecting insertion and removal tools.",
            "Use the correct plastic or metal removal tool for the contact size; inserting from the wrong side damages retention clips.",
            "After insertion, pull-test each contact lightly to confirm it is locked in the insert.",
            "Fill every unused contact cavity with a sealing plug to keep the environmental seal intact.",
            "Inspect for bent or recessed pins, cracked inserts, damaged grommets and corrosion before mating.",
            "Tighten coupling rings by hand or with soft-jawed pliers only to the specified engagement; do not use wrenches on coupling rings.",
            "Install backshells and strain reliefs so that the bundle load is not carried by the contacts.",
        ],
        pro_tips: &[
            "Use a flashlight and magnifier on pin faces; a single pushed-back pin is easy to miss.",
            "Never probe connector sockets with meter leads; use the mating test probe or a breakout box.",
            "Cap disconnected connectors immediately with dust caps to keep contamination out.",
        ],
        references: &[
            "MIL-DTL-38999 — Connectors, Electrical, Circular, Miniature, High Density, Quick Disconnect",
            "NAVAIR 01-1A-505-1 — Installation and Repair Practices, Aircraft Electric and Electronic Wiring",
            "SAE AS50881 — Wiring, Aerospace Vehicle",
        ],
    },
    RawEntry {
        key: "5-05",
        overview: "Make soldered electrical connections that are reliable under vibration and temperature cycling. Soldering in aircraft is restricted to specific applications; a cold or overheated joint is hard to detect visually and fractures under vibration.",
        study_guide: &[
            "Clean and tin conductors and terminals before joining; solder will not wet oxidized surfaces.",
            "Use rosin or low-activity flux only; acid fluxes cause corrosion and are prohibited for electrical work.",
            "Heat the joint, not the solder, and apply solder to the joint so it flows by capillary action.",
            "A good joint is smooth, concave and shows the contour of the conductor strands.",
            "Do not let solder wick up the strands beyond the joint, since it creates a stiff point that breaks in vibration.",
            "Support the soldered wire so that vibration does not flex the joint; add heat-shrink sleeving for strain relief.",
        ],
        pro_tips: &[
            "Use a heat sink clip between the joint and nearby insulation or components.",
            "Clean flux residue after soldering; residue attracts moisture.",
            "If the joint looks grainy or dull, reheat it rather than adding more solder.",
        ],
        references: &[
            "IPC J-STD-001 — Requirements for Soldered Electrical and Electronic Assemblies",
            "NASA-STD-8739.3 — Soldered Electrical Connections",
            "FAA AC 43.13-1B — Acceptable Methods, Techniques, and Practices: Aircraft Inspection and Repair, Chapter 11",
        ],
    },
    RawEntry {
        key: "5-06",
        overview: "Inspect electrical wiring interconnection systems (EWIS) for damage and repair insulation defects using approved methods. Aging and contaminated wiring degrades silently; zonal EWIS inspections are how operators find cracked insulation and arcing damage before they become fires.",
        study_guide: &[
            "EWIS includes wires, connectors, clamps, grommets, splices and the supports and labels associated with them.",
            "General visual inspections look for chafe, heat damage, fluid contamination, broken clamps and lint or debris accumulation.",
            "Arcing damage appears as localized burned insulation, melted metal, or pitting on adjacent structure.",
            "Insulation repairs are limited to damage that does not expose the conductor; exposed conductors require a splice or wire replacement.",
            "Repair sleeving must be rated for the same temperature and fluid environment as the original insulation.",
            "Record repairs and their locations so that repeat damage at the same point can be traced to a routing problem.",
        ],
        pro_tips: &[
            "Dust and lint in a bundle are fuel; clean zones during inspection instead of noting them for later.",
            "Look at the structure near bundles too; shiny rub marks on structure point to where the bundle has been moving.",
            "A repeated repair in the same location means the root cause is routing, not wire.",
        ],
        references: &[
            "14 CFR 25.1701 — Definition: Electrical wiring interconnection system (EWIS)",
            "FAA AC 25.27A — Development of Transport Category Airplane Electrical Wiring Interconnection Systems Instructions for Continued Airworthiness Using an Enhanced Zonal Analysis Procedure",
            "FAA AC 43.13-1B — Acceptable Methods, Techniques, and Practices: Aircraft Inspection and Repair, Chapter 11",
        ],
    },
    RawEntry {
        key: "6-01",
        overview: "Handle electrostatic-discharge-sensitive (ESDS) devices so that avionics modules are not damaged by static charge from people, tools or packaging. ESD damage is often latent: a module passes its bench test and then fails in service weeks later.",
        study_guide: &[
            "ESDS items are marked with the ESD susceptibility symbol on the unit, packaging or both.",
            "Wear a grounded wrist strap connected to the aircraft or workstation ground point before touching an ESDS item.",
            "Transport and store ESDS items only in static-shielding bags or conductive containers.",
            "Keep ordinary plastics, foam and paper out of the ESD-protected area; they generate and hold charge.",
            "Cover exposed connector pins on removed modules with conductive caps.",
            "Test wrist straps at the start of each shift and record the results.",
        ],
        pro_tips: &[
            "Touch the aircraft ground point before opening a static-shielding bag.",
            "Pink antistatic bags are not static-shielding; use metallized bags for ESDS modules.",
            "Low humidity days are the worst for static; be extra careful in winter and in air-conditioned hangars.",
        ],
        references: &[
            "ANSI/ESD S20.20 — Protection of Electrical and Electronic Parts, Assemblies and Equipment",
            "MIL-HDBK-263 — Electrostatic Discharge Control Handbook for Protection of Electrical and Electronic Parts, Assemblies and Equipment",
            "MIL-STD-1686 — Electrostatic Discharge Control Program",
        ],
    },
    RawEntry {
        key: "6-02",
        overview: "Install ground connections so that current return paths have low, stable resistance to structure. A degraded ground shows up as equipment malfunctions, noise on signal lines and, at high currents, local heating at the joint.",
        study_guide: &[
            "Remove paint, anodize and other finishes from the contact area down to bare metal, no larger than needed for the terminal and washer.",
            "Stack terminals on a ground stud in the order given by the manual, with the largest current terminal closest to the structure.",
            "Limit the number of terminals per stud; four is a common maximum.",
            "Do not mix power returns and sensitive signal grounds on the same stud unless the wiring diagram calls for it.",
            "Torque hardware to the specified value and apply the specified sealant or corrosion-preventive finish after installation.",
            "Measure resistance from the terminal to structure after installation to confirm the joint.",
        ],
        pro_tips: &[
            "Use a dedicated tool to clean the contact area; scrapers leave gouges that trap moisture.",
            "Keep star washers and nut plates from the kit; do not reuse crushed lockwashers.",
            "When troubleshooting intermittent avionics faults, check grounds before replacing boxes.",
        ],
        references: &[
            "SAE ARP1870 — Aerospace Systems Electrical Bonding and Grounding for Electromagnetic Compatibility and Safety",
            "MIL-B-5087B — Bonding, Electrical, and Lightning Protection",
            "FAA AC 43.13-1B — Acceptable Methods, Techniques, and Practices: Aircraft Inspection and Repair, Chapter 11",
        ],
    },
    RawEntry {
        key: "6-03",
        overview: "Measure bonding resistance to confirm that structure, equipment and fluid-line components are electrically continuous. Bond resistance is what protects the aircraft against static ignition of fuel vapor and against lightning current flowing through unintended paths.",
        study_guide: &[
            "Use a four-wire milliohm meter so that lead resistance does not appear in the reading.",
            "Equipment bonds are commonly required to be 2.5 milliohms or less; check the manual for the applicable limit.",
            "Measure across each bonded joint, not from one end of the aircraft to the other.",
            "Clean probe contact points lightly so the reading reflects the joint, not surface finish.",
            "Record the readings; a rising trend between inspections reveals corrosion before it fails the limit.",
            "Disconnect aircraft power before bonding measurements to protect the meter and the technician.",
        ],
        pro_tips: &[
            "Zero the meter on a known-good reference before the first reading.",
            "Wiggle the jumper while measuring; a reading that jumps indicates a loose or corroded joint.",
            "Probes with sharp points pierce thin finishes; use them on test points, never on fuel tank surfaces.",
        ],
        references: &[
            "MIL-B-5087B — Bonding, Electrical, and Lightning Protection",
            "SAE ARP1870 — Aerospace Systems Electrical Bonding and Grounding for Electromagnetic Compatibility and Safety",
            "MIL-STD-464 — Electromagnetic Environmental Effects Requirements for Systems",
        ],
    },
    RawEntry {
        key: "6-04",
        overview: "Install bonding jumpers across movable surfaces, shock-mounted equipment and fluid lines so that static charge and lightning current have a defined low-resistance path. A missing or broken jumper lets charge build up until it arcs, which near fuel vapor is an ignition source and near avionics is a source of interference.",
        study_guide: &[
            "Jumpers must be as short as possible while allowing full travel of the moving part without strain.",
            "Jumper material must be compatible with the structure to prevent galvanic corrosion; use tinned copper on aluminum with the specified washers.",
            "Clean contact surfaces to bare metal at each end and refinish after installation.",
            "Install jumpers so they cannot interfere with control movement or chafe against structure.",
            "Measure resistance across the jumper after installation and compare to the manual's limit.",
            "Replace jumpers with broken strands, corrosion or frayed braid; do not repair them.",
        ],
        pro_tips: &[
            "Cycle the control surface through full travel after installing the jumper and watch the jumper at both extremes.",
            "Bonding jumpers on hinges are easy to overlook during paint; check them after every repaint.",
            "Carry a few spare jumpers of common lengths; a missing jumper can ground an aircraft.",
        ],
        references: &[
            "MIL-B-5087B — Bonding, Electrical, and Lightning Protection",
            "SAE ARP1870 — Aerospace Systems Electrical Bonding and Grounding for Electromagnetic Compatibility and Safety",
            "FAA AC 43.13-1B — Acceptable Methods, Techniques, and Practices: Aircraft Inspection and Repair, Chapter 11",
        ],
    },
    RawEntry {
        key: "6-05",
        overview: "Terminate cable shields so that they provide the electromagnetic protection they were designed for. A shield terminated with a long pigtail or left floating can be worse than no shield, coupling interference into the very circuit it is meant to protect.",
        study_guide: &[
            "Keep shield pigtails as short as practical; long pigtails add inductance that defeats shielding at high frequency.",
            "Use solder sleeves or crimp shield terminations as specified, never by twisting the shield braid.",
            "Whether a shield is grounded at one or both ends is a design decision; follow the wiring diagram.",
            "Backshells with 360-degree shield termination give the best high-frequency performance.",
            "Insulate shield terminations so they cannot short to adjacent pins or structure.",
            "Inspect shields for broken braid and corrosion during connector maintenance.",
        ],
        pro_tips: &[
            "Strip shields with a shield-stripping tool; a knife nicks the inner insulation.",
            "Mark the shield ground point when disassembling so it goes back to the same stud.",
            "If a radio picks up engine noise after a repair, suspect a shield termination first.",
        ],
        references: &[
            "SAE AS50881 — Wiring, Aerospace Vehicle",
            "MIL-STD-464 — Electromagnetic Environmental Effects Requirements for Systems",
            "SAE ARP1870 — Aerospace Systems Electrical Bonding and Grounding for Electromagnetic Compatibility and Safety",
        ],
    },
    RawEntry {
        key: "6-06",
        overview: "Inspect and replace static dischargers on flight control surfaces and wingtips. Dischargers bleed precipitation static off the airframe in flight; missing or damaged dischargers cause radio and navigation interference in rain, snow and dust.",
        study_guide: &[
            "Dischargers are mounted at trailing edges and tips where charge concentrates.",
            "Inspect for missing tips, broken bases, erosion and loose mounting.",
            "Measure discharger base-to-structure resistance with a milliohm meter and the discharger resistance with a megohmmeter as the manual specifies.",
            "The minimum equipment list may allow dispatch with a limited number of dischargers missing; check the applicable document.",
            "Bonded bases require the same surface preparation and sealing as any other bond.",
        ],
        pro_tips: &[
            "Count dischargers on the walkaround; their absence is easy to miss at a glance.",
            "Dischargers catch on hangar doors and stands; check them after any ground handling incident.",
        ],
        references: &[
            "ATA iSpec 2200, Chapter 23-60 — Static Discharging",
            "MIL-B-5087B — Bonding, Electrical, and Lightning Protection",
            "MIL-STD-464 — Electromagnetic Environmental Effects Requirements for Systems",
        ],
    },
    RawEntry {
        key: "6-07",
        overview: "Inspect an aircraft after a suspected lightning strike to find entry and exit points and any damage along the current path. Lightning damage can be small on the surface but severe underneath, and bonding or avionics damage may not be visible at all.",
        study_guide: &[
            "Lightning attaches at extremities such as the nose, wingtips, tail and engine nacelles, and may sweep aft along the surface.",
            "Look for pitting, burn marks, discoloration and melted fasteners at attachment points.",
            "Inspect bonding jumpers, static dischargers and hinges along the likely current path.",
            "Check composite structure for delamination around attachment points with tap or instrument testing.",
            "Perform operational checks of avionics, compass and fuel quantity systems after a confirmed strike.",
            "Record findings and use the lightning zoning of the aircraft to prioritise inspection areas.",
        ],
        pro_tips: &[
            "Ask the crew where they saw or heard the strike; it narrows the search considerably.",
            "A magnetic compass can be affected by a strike; schedule a compass swing if readings are suspect.",
        ],
        references: &[
            "SAE ARP5414 — Aircraft Lightning Zoning",
            "SAE ARP5412 — Aircraft Lightning Environment and Related Test Waveforms",
            "FAA AC 20-136 — Aircraft Electrical and Electronic System Lightning Protection",
        ],
    },
    RawEntry {
        key: "6-08",
        overview: "Prevent and treat corrosion at electrical bonds and grounds. Corrosion raises bond resistance and can open a current path entirely, defeating lightning and static protection while looking intact from a distance.",
        study_guide: &[
            "Galvanic corrosion occurs where dissimilar metals contact in the presence of moisture; choose compatible materials and washers.",
            "Remove corrosion mechanically with non-metallic abrasives appropriate to the base metal.",
            "Apply chemical conversion coating to bare aluminum after cleaning and before reassembly.",
            "Seal bonded joints with the specified sealant after the resistance check, not before.",
            "Reapply corrosion-preventive compounds in areas exposed to moisture, such as wheel wells and bilges.",
            "Recheck bond resistance after corrosion treatment.",
        ],
        pro_tips: &[
            "Never use steel wool or carbon steel brushes on aluminum; embedded particles start new corrosion.",
            "White powdery deposits on aluminum are corrosion products, not dirt.",
            "Treat corrosion the day you find it; it does not wait for the next inspection.",
        ],
        references: &[
            "FAA AC 43-4B — Corrosion Control for Aircraft",
            "MIL-DTL-5541 — Chemical Conversion Coatings on Aluminum and Aluminum Alloys",
            "MIL-B-5087B — Bonding, Electrical, and Lightning Protection",
        ],
    },
];
