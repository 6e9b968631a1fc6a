//! Static lookup tables the generators draw from.

/// A real book used to fill title, author and genre cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogBook {
    pub title: &'static str,
    pub author: &'static str,
    pub genre: &'static str,
}

const fn book(title: &'static str, author: &'static str, genre: &'static str) -> CatalogBook {
    CatalogBook {
        title,
        author,
        genre,
    }
}

/// 100 well-known books with their author and genre.
pub const BOOKS: [CatalogBook; 100] = [
    book("The Hunger Games", "Suzanne Collins", "Science Fiction"),
    book("Pride and Prejudice", "Jane Austen", "Romance"),
    book("To Kill a Mockingbird", "Harper Lee", "Fiction"),
    book("Harry Potter and the Order of the Phoenix", "J.K. Rowling", "Fantasy"),
    book("The Book Thief", "Markus Zusak", "Fiction"),
    book("Animal Farm", "George Orwell", "Fiction"),
    book("The Chronicles of Narnia", "C.S. Lewis", "Fantasy"),
    book("The Fault in Our Stars", "John Green", "Fiction"),
    book("The Picture of Dorian Gray", "Oscar Wilde", "Fiction"),
    book("The Lightning Thief", "Rick Riordan", "Fantasy"),
    book("Wuthering Heights", "Emily Bronte", "Romance"),
    book("The Giving Tree", "Shel Silverstein", "Fiction"),
    book("The Perks of Being a Wallflower", "Stephen Chbosky", "Fiction"),
    book("Gone with the Wind", "Margaret Mitchell", "Romance"),
    book("The Little Prince", "Antoine de Saint-Exupery", "Fiction"),
    book("Jane Eyre", "Charlotte Bronte", "Romance"),
    book("The Great Gatsby", "F. Scott Fitzgerald", "Fiction"),
    book("Crime and Punishment", "Fyodor Dostoevsky", "Fiction"),
    book("The Da Vinci Code", "Dan Brown", "Thriller"),
    book("Alice's Adventures in Wonderland", "Lewis Carroll", "Fantasy"),
    book("Divergent", "Veronica Roth", "Science Fiction"),
    book("Les Miserables", "Victor Hugo", "Fiction"),
    book("Memoirs of a Geisha", "Arthur Golden", "Fiction"),
    book("Anne of Green Gables", "L.M. Montgomery", "Fiction"),
    book("The Alchemist", "Paulo Coelho", "Fiction"),
    book("Lord of the Flies", "William Golding", "Fiction"),
    book("Brave New World", "Aldous Huxley", "Science Fiction"),
    book("The Hitchhiker's Guide to the Galaxy", "Douglas Adams", "Science Fiction"),
    book("City of Bones", "Cassandra Clare", "Fantasy"),
    book("The Help", "Kathryn Stockett", "Fiction"),
    book("Dracula", "Bram Stoker", "Fiction"),
    book("Fahrenheit 451", "Ray Bradbury", "Science Fiction"),
    book("Charlotte's Web", "E.B. White", "Fiction"),
    book("1984", "George Orwell", "Science Fiction"),
    book("Of Mice and Men", "John Steinbeck", "Fiction"),
    book("Ender's Game", "Orson Scott Card", "Science Fiction"),
    book("The Catcher in the Rye", "J.D. Salinger", "Fiction"),
    book("Little Women", "Louisa May Alcott", "Fiction"),
    book("One Hundred Years of Solitude", "Gabriel Garcia Marquez", "Fiction"),
    book("A Thousand Splendid Suns", "Khaled Hosseini", "Fiction"),
    book("The Outsiders", "S.E. Hinton", "Fiction"),
    book("The Secret Garden", "Frances Hodgson Burnett", "Fiction"),
    book("The Princess Bride", "William Goldman", "Fantasy"),
    book("A Game of Thrones", "George R.R. Martin", "Fantasy"),
    book("The Time Traveler's Wife", "Audrey Niffenegger", "Romance"),
    book("Harry Potter and the Deathly Hallows", "J.K. Rowling", "Fantasy"),
    book("The Odyssey", "Homer", "Fiction"),
    book("Frankenstein", "Mary Shelley", "Science Fiction"),
    book("The Handmaid's Tale", "Margaret Atwood", "Science Fiction"),
    book("A Wrinkle in Time", "Madeleine L'Engle", "Science Fiction"),
    book("The Kite Runner", "Khaled Hosseini", "Fiction"),
    book("The Giver", "Lois Lowry", "Science Fiction"),
    book("Harry Potter and the Prisoner of Azkaban", "J.K. Rowling", "Fantasy"),
    book("The Girl with the Dragon Tattoo", "Stieg Larsson", "Thriller"),
    book("Dune", "Frank Herbert", "Science Fiction"),
    book("Where the Wild Things Are", "Maurice Sendak", "Fiction"),
    book("The Lovely Bones", "Alice Sebold", "Fiction"),
    book("The Adventures of Huckleberry Finn", "Mark Twain", "Fiction"),
    book("Life of Pi", "Yann Martel", "Fiction"),
    book("Lolita", "Vladimir Nabokov", "Fiction"),
    book("A Tale of Two Cities", "Charles Dickens", "Fiction"),
    book("Slaughterhouse-Five", "Kurt Vonnegut", "Science Fiction"),
    book("The Bell Jar", "Sylvia Plath", "Fiction"),
    book("Matilda", "Roald Dahl", "Fiction"),
    book("Water for Elephants", "Sara Gruen", "Fiction"),
    book("Harry Potter and the Sorcerer's Stone", "J.K. Rowling", "Fantasy"),
    book("The Stand", "Stephen King", "Thriller"),
    book("Catch-22", "Joseph Heller", "Fiction"),
    book("The Adventures of Sherlock Holmes", "Arthur Conan Doyle", "Mystery"),
    book("The Pillars of the Earth", "Ken Follett", "Fiction"),
    book("Rebecca", "Daphne du Maurier", "Mystery"),
    book("Watership Down", "Richard Adams", "Fantasy"),
    book("The Color Purple", "Alice Walker", "Fiction"),
    book("Great Expectations", "Charles Dickens", "Fiction"),
    book("Outlander", "Diana Gabaldon", "Romance"),
    book("Anna Karenina", "Leo Tolstoy", "Fiction"),
    book("The Fellowship of the Ring", "J.R.R. Tolkien", "Fantasy"),
    book("A Clockwork Orange", "Anthony Burgess", "Science Fiction"),
    book("One Flew Over the Cuckoo's Nest", "Ken Kesey", "Fiction"),
    book("The Brothers Karamazov", "Fyodor Dostoevsky", "Fiction"),
    book("My Sister's Keeper", "Jodi Picoult", "Fiction"),
    book("A Tree Grows in Brooklyn", "Betty Smith", "Fiction"),
    book("The Road", "Cormac McCarthy", "Science Fiction"),
    book("The Golden Compass", "Philip Pullman", "Fantasy"),
    book("Harry Potter and the Goblet of Fire", "J.K. Rowling", "Fantasy"),
    book("Siddhartha", "Hermann Hesse", "Fiction"),
    book("And Then There Were None", "Agatha Christie", "Mystery"),
    book("Don Quixote", "Miguel de Cervantes", "Fiction"),
    book("Angela's Ashes", "Frank McCourt", "Biography"),
    book("The Old Man and the Sea", "Ernest Hemingway", "Fiction"),
    book("The Poisonwood Bible", "Barbara Kingsolver", "Fiction"),
    book("Beloved", "Toni Morrison", "Fiction"),
    book("The Count of Monte Cristo", "Alexandre Dumas", "Fiction"),
    book("The Shining", "Stephen King", "Thriller"),
    book("Moby-Dick", "Herman Melville", "Fiction"),
    book("The Grapes of Wrath", "John Steinbeck", "Fiction"),
    book("War and Peace", "Leo Tolstoy", "Fiction"),
    book("The Hobbit", "J.R.R. Tolkien", "Fantasy"),
    book("Treasure Island", "Robert Louis Stevenson", "Fiction"),
    book("The Jungle Book", "Rudyard Kipling", "Fiction"),
];

/// ISBNs that fail the ISBN-13 shape check in distinct ways.
///
/// The last entry is completed with a random digit (`978-7`) when used.
pub const MALFORMED_ISBNS: [&str; 5] = [
    "1234567890123",
    "979-0-12-345678-9",
    "978-12-34-567890-1",
    "978-X-YZ-ABCDEF-G",
    "978-",
];

pub const STORE_TYPES: [&str; 17] = [
    "Main Street",
    "Downtown",
    "Westside",
    "Eastside",
    "North",
    "South",
    "Central",
    "Plaza",
    "Mall",
    "Village",
    "Harbor",
    "Lakeside",
    "Uptown",
    "Midtown",
    "Garden",
    "Park",
    "Campus",
];

pub const STREET_NAMES: [&str; 15] = [
    "Main St",
    "Oak Ave",
    "Elm St",
    "Maple Dr",
    "Cedar Ln",
    "Pine Rd",
    "Broadway",
    "Market St",
    "Park Ave",
    "Lake Blvd",
    "River Rd",
    "Hill St",
    "Sunset Blvd",
    "First Ave",
    "Second St",
];

/// States with five cities each, in a fixed order.
pub const CITIES_BY_STATE: [(&str, [&str; 5]); 10] = [
    ("CA", ["Los Angeles", "San Francisco", "San Diego", "Sacramento", "San Jose"]),
    ("NY", ["New York", "Buffalo", "Rochester", "Albany", "Syracuse"]),
    ("TX", ["Houston", "Dallas", "Austin", "San Antonio", "Fort Worth"]),
    ("FL", ["Miami", "Orlando", "Tampa", "Jacksonville", "St Petersburg"]),
    ("IL", ["Chicago", "Springfield", "Naperville", "Evanston", "Peoria"]),
    ("WA", ["Seattle", "Tacoma", "Spokane", "Bellevue", "Olympia"]),
    ("MA", ["Boston", "Cambridge", "Worcester", "Salem", "Springfield"]),
    ("CO", ["Denver", "Boulder", "Colorado Springs", "Fort Collins", "Aurora"]),
    ("OR", ["Portland", "Eugene", "Salem", "Bend", "Medford"]),
    ("PA", ["Philadelphia", "Pittsburgh", "Harrisburg", "Allentown", "Erie"]),
];

pub const CASHIER_NAMES: [&str; 15] = [
    "Alex Rivera",
    "Sam Chen",
    "Jordan Lee",
    "Morgan Patel",
    "Casey Brooks",
    "Riley Foster",
    "Quinn Taylor",
    "Avery Kim",
    "Blake Nguyen",
    "Drew Santos",
    "Jamie Walsh",
    "Skyler Grant",
    "Reese Harper",
    "Parker Stone",
    "Logan Cruz",
];

pub const INSTORE_PAYMENT_METHODS: [&str; 3] = ["credit_card", "debit_card", "cash"];

pub const ONLINE_PAYMENT_METHODS: [&str; 4] = ["credit_card", "debit_card", "paypal", "gift_card"];
