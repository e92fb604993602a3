// Swap Router – Plans the swaps for a sequence of desired interactions
// Copyright (C) 2026  Neil Roberts
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.

fn index_of(path: &[usize], node: usize) -> Option<usize> {
    path.iter().position(|&n| n == node)
}

// The part of `host` running from `start` to `end`, walked in that
// direction
fn sub_path(host: &[usize], start: usize, end: usize) -> Vec<usize> {
    if start <= end {
        host[start..=end].to_vec()
    } else {
        host[end..=start].iter().rev().copied().collect()
    }
}

/// Makes two shortest paths agree with each other where they overlap,
/// so that asking whether a node of one lies on the other gives a
/// consistent answer. The second path is the one adjusted, except
/// when the first path lies entirely inside the second.
pub fn merge_paths(path1: &[usize], path2: &[usize]) -> (Vec<usize>, Vec<usize>) {
    let (Some(&head1), Some(&tail1), Some(&head2), Some(&tail2)) =
        (path1.first(), path1.last(), path2.first(), path2.last())
    else {
        return (path1.to_vec(), path2.to_vec());
    };

    // path2 runs inside path1
    if let (Some(start), Some(end)) =
        (index_of(path1, head2), index_of(path1, tail2))
    {
        return (path1.to_vec(), sub_path(path1, start, end));
    }

    // path1 runs inside path2
    if let (Some(start), Some(end)) =
        (index_of(path2, head1), index_of(path2, tail1))
    {
        return (sub_path(path2, start, end), path2.to_vec());
    }

    let mut aligned = path2.to_vec();

    // Tails overlap. From where path1’s tail enters path2, path2
    // follows path1 backwards.
    if let (Some(start), true) = (index_of(path2, tail1), path1.contains(&tail2)) {
        for (offset, node) in aligned[start..].iter_mut().enumerate() {
            let Some(index) = path1.len().checked_sub(offset + 1)
            else {
                break;
            };

            *node = path1[index];
        }

        return (path1.to_vec(), aligned);
    }

    // Heads overlap. Up to where path1’s head sits in path2, path2
    // follows path1 backwards from path2’s own head.
    if let (Some(end), Some(path1_start)) =
        (index_of(path2, head1), index_of(path1, head2))
    {
        for (offset, node) in aligned[..=end].iter_mut().enumerate() {
            let Some(index) = path1_start.checked_sub(offset)
            else {
                break;
            };

            *node = path1[index];
        }

        return (path1.to_vec(), aligned);
    }

    (path1.to_vec(), aligned)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn second_inside_first() {
        assert_eq!(
            merge_paths(&[0, 1, 2, 3], &[1, 4, 2]),
            (vec![0, 1, 2, 3], vec![1, 2]),
        );
        // Walking the other way keeps path2’s direction
        assert_eq!(
            merge_paths(&[0, 1, 2, 3, 4], &[3, 7, 1]),
            (vec![0, 1, 2, 3, 4], vec![3, 2, 1]),
        );
        // A single shared node stays a single node
        assert_eq!(
            merge_paths(&[2, 1, 0], &[1]),
            (vec![2, 1, 0], vec![1]),
        );
    }

    #[test]
    fn first_inside_second() {
        assert_eq!(
            merge_paths(&[1, 2], &[0, 1, 2, 3]),
            (vec![1, 2], vec![0, 1, 2, 3]),
        );
        assert_eq!(
            merge_paths(&[4, 9, 2], &[0, 2, 3, 4, 5]),
            (vec![4, 3, 2], vec![0, 2, 3, 4, 5]),
        );
        assert_eq!(merge_paths(&[1], &[2, 1, 0]), (vec![1], vec![2, 1, 0]));
    }

    #[test]
    fn tails_overlap() {
        // path2 reaches path1’s tail through a different node than
        // the one path1 came from
        assert_eq!(
            merge_paths(&[0, 1, 2, 3], &[5, 3, 6, 2]),
            (vec![0, 1, 2, 3], vec![5, 3, 2, 1]),
        );
        assert_eq!(
            merge_paths(&[0, 2, 3], &[1, 3, 2]),
            (vec![0, 2, 3], vec![1, 3, 2]),
        );
    }

    #[test]
    fn heads_overlap() {
        assert_eq!(
            merge_paths(&[0, 1, 3], &[1, 0, 5]),
            (vec![0, 1, 3], vec![1, 0, 5]),
        );
        assert_eq!(
            merge_paths(&[0, 1, 2, 3], &[2, 7, 0, 5]),
            (vec![0, 1, 2, 3], vec![2, 1, 0, 5]),
        );
    }

    #[test]
    fn unrelated() {
        assert_eq!(
            merge_paths(&[0, 5], &[1, 3]),
            (vec![0, 5], vec![1, 3]),
        );
        assert_eq!(
            merge_paths(&[0, 1, 2], &[4, 1, 5]),
            (vec![0, 1, 2], vec![4, 1, 5]),
        );
        assert_eq!(merge_paths(&[], &[1, 2]), (vec![], vec![1, 2]));
    }
}
