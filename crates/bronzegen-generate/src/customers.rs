use bronzegen_core::Customer;

const fn customer(
    email: &'static str,
    name: &'static str,
    address: &'static str,
    city: &'static str,
    state: &'static str,
    zip: &'static str,
) -> Customer {
    Customer {
        email,
        name,
        address,
        city,
        state,
        zip,
    }
}

/// Shared customer directory for both order channels.
pub const CUSTOMERS: [Customer; 40] = [
    customer(
        "emma.johnson@example.com",
        "Emma Johnson",
        "5315 Cedar Ln",
        "Los Angeles",
        "CA",
        "90050",
    ),
    customer(
        "liam.martinez@example.com",
        "Liam Martinez",
        "801 Maple Dr",
        "San Diego",
        "CA",
        "92168",
    ),
    customer(
        "olivia.thompson@example.com",
        "Olivia Thompson",
        "1552 Birch Way",
        "New York",
        "NY",
        "10074",
    ),
    customer(
        "noah.garcia@example.com",
        "Noah Garcia",
        "960 Chestnut Ave",
        "Buffalo",
        "NY",
        "14227",
    ),
    customer(
        "ava.robinson@example.com",
        "Ava Robinson",
        "624 Maple Dr",
        "Austin",
        "TX",
        "78755",
    ),
    customer(
        "ethan.clark@example.com",
        "Ethan Clark",
        "6861 Maple Dr",
        "Houston",
        "TX",
        "77030",
    ),
    customer(
        "sophia.lewis@example.com",
        "Sophia Lewis",
        "1496 Chestnut Ave",
        "Miami",
        "FL",
        "33154",
    ),
    customer(
        "mason.walker@example.com",
        "Mason Walker",
        "978 Walnut St",
        "Orlando",
        "FL",
        "32815",
    ),
    customer(
        "isabella.young@example.com",
        "Isabella Young",
        "3667 Aspen Dr",
        "Chicago",
        "IL",
        "60680",
    ),
    customer(
        "lucas.allen@example.com",
        "Lucas Allen",
        "9561 Oak Ave",
        "Seattle",
        "WA",
        "98173",
    ),
    customer(
        "mia.king@example.com",
        "Mia King",
        "9603 Willow Ct",
        "Boston",
        "MA",
        "02106",
    ),
    customer(
        "elijah.wright@example.com",
        "Elijah Wright",
        "3632 Oak Ave",
        "Denver",
        "CO",
        "80271",
    ),
    customer(
        "charlotte.scott@example.com",
        "Charlotte Scott",
        "2191 Elm St",
        "Portland",
        "OR",
        "97253",
    ),
    customer(
        "james.torres@example.com",
        "James Torres",
        "2373 Chestnut Ave",
        "Philadelphia",
        "PA",
        "19115",
    ),
    customer(
        "amelia.hill@example.com",
        "Amelia Hill",
        "9363 Elm St",
        "Los Angeles",
        "CA",
        "90071",
    ),
    customer(
        "benjamin.green@example.com",
        "Benjamin Green",
        "2971 Maple Dr",
        "San Diego",
        "CA",
        "92174",
    ),
    customer(
        "harper.adams@example.com",
        "Harper Adams",
        "9368 Aspen Dr",
        "New York",
        "NY",
        "10024",
    ),
    customer(
        "henry.baker@example.com",
        "Henry Baker",
        "6111 Maple Dr",
        "Buffalo",
        "NY",
        "14270",
    ),
    customer(
        "evelyn.nelson@example.com",
        "Evelyn Nelson",
        "1038 Walnut St",
        "Austin",
        "TX",
        "78707",
    ),
    customer(
        "daniel.carter@example.com",
        "Daniel Carter",
        "3384 Spruce St",
        "Houston",
        "TX",
        "77087",
    ),
    customer(
        "abigail.mitchell@example.com",
        "Abigail Mitchell",
        "8721 Willow Ct",
        "Miami",
        "FL",
        "33199",
    ),
    customer(
        "jack.perez@example.com",
        "Jack Perez",
        "5156 Spruce St",
        "Orlando",
        "FL",
        "32874",
    ),
    customer(
        "emily.roberts@example.com",
        "Emily Roberts",
        "7434 Birch Way",
        "Chicago",
        "IL",
        "60638",
    ),
    customer(
        "owen.turner@example.com",
        "Owen Turner",
        "4080 Cedar Ln",
        "Seattle",
        "WA",
        "98189",
    ),
    customer(
        "ella.phillips@example.com",
        "Ella Phillips",
        "4009 Maple Dr",
        "Boston",
        "MA",
        "02173",
    ),
    customer(
        "samuel.campbell@example.com",
        "Samuel Campbell",
        "4929 Chestnut Ave",
        "Denver",
        "CO",
        "80263",
    ),
    customer(
        "grace.parker@example.com",
        "Grace Parker",
        "5637 Juniper Ln",
        "Portland",
        "OR",
        "97257",
    ),
    customer(
        "leo.evans@example.com",
        "Leo Evans",
        "4727 Walnut St",
        "Philadelphia",
        "PA",
        "19109",
    ),
    customer(
        "chloe.edwards@example.com",
        "Chloe Edwards",
        "1944 Chestnut Ave",
        "Los Angeles",
        "CA",
        "90053",
    ),
    customer(
        "nathan.collins@example.com",
        "Nathan Collins",
        "2712 Birch Way",
        "San Diego",
        "CA",
        "92119",
    ),
    customer(
        "zoe.stewart@example.com",
        "Zoe Stewart",
        "8021 Willow Ct",
        "New York",
        "NY",
        "10005",
    ),
    customer(
        "ryan.morris@example.com",
        "Ryan Morris",
        "1281 Chestnut Ave",
        "Buffalo",
        "NY",
        "14273",
    ),
    customer(
        "lily.rogers@example.com",
        "Lily Rogers",
        "5150 Birch Way",
        "Austin",
        "TX",
        "78788",
    ),
    customer(
        "isaac.reed@example.com",
        "Isaac Reed",
        "5747 Walnut St",
        "Houston",
        "TX",
        "77063",
    ),
    customer(
        "nora.cook@example.com",
        "Nora Cook",
        "9511 Spruce St",
        "Miami",
        "FL",
        "33108",
    ),
    customer(
        "caleb.morgan@example.com",
        "Caleb Morgan",
        "1543 Elm St",
        "Orlando",
        "FL",
        "32860",
    ),
    customer(
        "hannah.bell@example.com",
        "Hannah Bell",
        "1074 Oak Ave",
        "Chicago",
        "IL",
        "60693",
    ),
    customer(
        "julian.murphy@example.com",
        "Julian Murphy",
        "5082 Aspen Dr",
        "Seattle",
        "WA",
        "98173",
    ),
    customer(
        "aria.bailey@example.com",
        "Aria Bailey",
        "7311 Elm St",
        "Boston",
        "MA",
        "02191",
    ),
    customer(
        "gabriel.cooper@example.com",
        "Gabriel Cooper",
        "6330 Aspen Dr",
        "Denver",
        "CO",
        "80244",
    ),
];
